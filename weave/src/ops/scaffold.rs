//! Manifest to artifact tree.

use std::path::PathBuf;

use eyre::{Context, Result};
use weave_codegen::{
    dispatch::{Project, Solution, SourceFile},
    recipes::{controller, request_shell},
};
use weave_core::{CSHARP_NAMING, Inflector};

use crate::manifest::{Manifest, ServiceSection};

pub const MEDIATR_VERSION: &str = "12.4.1";

/// Build the solution artifact for `manifest`.
///
/// Each service becomes a web project under `src/` holding one controller per
/// resource and one request container per resource and recipe.
pub fn scaffold(manifest: &Manifest, inflector: &Inflector) -> Result<Solution> {
    let mut solution = Solution::new(&manifest.solution.name, "");

    for service in &manifest.services {
        let project = service_project(manifest, service, inflector)
            .wrap_err_with(|| format!("Failed to scaffold service '{}'", service.name))?;
        solution = solution.member(project);
    }

    Ok(solution)
}

fn service_project(
    manifest: &Manifest,
    service: &ServiceSection,
    inflector: &Inflector,
) -> Result<Project> {
    let service_name = CSHARP_NAMING.type_name(&service.name);
    let project_name = format!("{}.{}", manifest.solution.name, service_name);
    let namespace = format!("{}.{}", manifest.namespace(), service_name);
    let root = PathBuf::from("src").join(&project_name);
    let recipes = service.recipes()?;

    let mut project = Project::new(&project_name, &root)
        .web()
        .namespace(&namespace)
        .package("MediatR", MEDIATR_VERSION);

    for resource in &service.resources {
        let resource = inflector.variants(resource);
        tracing::debug!(service = %service_name, resource = %resource.pascal, "scaffolding resource");

        project = project.file(SourceFile::syntax(
            root.join("Controllers"),
            controller(&namespace, &resource, &recipes)?,
        ));

        let features = root.join("Features").join(&resource.pascal_plural);
        for recipe in &recipes {
            project = project.file(SourceFile::syntax(
                &features,
                request_shell(&namespace, &resource, *recipe)?,
            ));
        }
    }

    Ok(project)
}

#[cfg(test)]
mod tests {
    use weave_codegen::dispatch::Artifact;

    use super::*;

    fn destinations(artifact: &Artifact, out: &mut Vec<String>) {
        out.push(artifact.destination().display().to_string());
        for child in artifact.children() {
            destinations(child, out);
        }
    }

    #[test]
    fn test_scaffold_layout() {
        let manifest = Manifest::parse(
            r#"
[solution]
name = "Shop"

[[services]]
name = "customers"
resources = ["Customer"]
recipes = ["get-by-id", "delete"]
"#,
        )
        .unwrap();

        let solution = scaffold(&manifest, &Inflector::new()).unwrap();
        let mut paths = Vec::new();
        destinations(&solution.into(), &mut paths);

        assert_eq!(
            paths,
            vec![
                "Shop.slnx",
                "src/Shop.Customers/Shop.Customers.csproj",
                "src/Shop.Customers/Controllers/CustomersController.cs",
                "src/Shop.Customers/Features/Customers/GetCustomerById.cs",
                "src/Shop.Customers/Features/Customers/DeleteCustomer.cs",
            ]
        );
    }

    #[test]
    fn test_scaffold_without_services() {
        let manifest = Manifest::parse("[solution]\nname = \"Empty\"\n").unwrap();
        let solution = scaffold(&manifest, &Inflector::new()).unwrap();
        assert_eq!(solution.projects().count(), 0);
    }
}
