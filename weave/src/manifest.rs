//! The `weave.toml` manifest.

use std::path::Path;

use eyre::{Context, Result, bail};
use serde::Deserialize;
use weave_codegen::recipes::EndpointRecipe;
use weave_core::CSHARP_NAMING;

pub const MANIFEST_FILE: &str = "weave.toml";

/// Parsed `weave.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub solution: SolutionSection,
    #[serde(default)]
    pub services: Vec<ServiceSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionSection {
    pub name: String,
    /// Root namespace, defaults to the solution name.
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    pub name: String,
    #[serde(default)]
    pub resources: Vec<String>,
    /// Recipe names; every recipe when omitted.
    pub recipes: Option<Vec<String>>,
}

impl Manifest {
    /// Read and validate a manifest file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn namespace(&self) -> &str {
        self.solution
            .namespace
            .as_deref()
            .unwrap_or(&self.solution.name)
    }

    fn validate(&self) -> Result<()> {
        if self.solution.name.trim().is_empty() {
            bail!("solution name must not be empty");
        }

        // Keyed by generated type name: services and resources that differ
        // only in case would land on the same project or feature folder.
        let mut seen: Vec<(String, &str)> = Vec::new();
        for service in &self.services {
            if service.name.trim().is_empty() {
                bail!("service name must not be empty");
            }
            let type_name = CSHARP_NAMING.type_name(&service.name);
            if let Some((_, first)) = seen.iter().find(|(name, _)| *name == type_name) {
                if *first == service.name {
                    bail!("service '{}' is declared more than once", service.name);
                }
                bail!(
                    "services '{}' and '{}' both generate project '{}'",
                    first,
                    service.name,
                    type_name
                );
            }
            seen.push((type_name, service.name.as_str()));
            service.validate()?;
        }

        Ok(())
    }
}

impl ServiceSection {
    fn validate(&self) -> Result<()> {
        let mut seen: Vec<(String, &str)> = Vec::new();
        for resource in &self.resources {
            if resource.trim().is_empty() {
                bail!("service '{}' has an empty resource name", self.name);
            }
            let type_name = CSHARP_NAMING.type_name(resource);
            if let Some((_, first)) = seen.iter().find(|(name, _)| *name == type_name) {
                bail!(
                    "resources '{}' and '{}' in service '{}' both generate type '{}'",
                    first,
                    resource,
                    self.name,
                    type_name
                );
            }
            seen.push((type_name, resource.as_str()));
        }
        self.recipes()?;
        Ok(())
    }

    /// Requested recipes in manifest order, without repeats.
    pub fn recipes(&self) -> Result<Vec<EndpointRecipe>> {
        let Some(names) = &self.recipes else {
            return Ok(EndpointRecipe::ALL.to_vec());
        };

        let mut recipes = Vec::with_capacity(names.len());
        for name in names {
            let recipe: EndpointRecipe = name
                .parse()
                .wrap_err_with(|| format!("in service '{}'", self.name))?;
            if !recipes.contains(&recipe) {
                recipes.push(recipe);
            }
        }
        Ok(recipes)
    }
}
