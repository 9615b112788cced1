//! Built-in strategies, one per artifact kind.

use serde::Serialize;
use weave_core::relative_path;

use super::{Artifact, ArtifactKind, ArtifactStrategy, FileBody, PackageRef};
use crate::{
    Error, Result,
    builder::Renderable,
    session::Session,
    template::{CSPROJ_TEMPLATE, SLNX_TEMPLATE, Tokens},
};

fn mismatch(expected: ArtifactKind, artifact: &Artifact) -> Error {
    Error::ArtifactMismatch {
        expected: expected.to_string(),
        found: artifact.kind().to_string(),
    }
}

/// Renders a syntax node, or stores lines verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStrategy;

impl ArtifactStrategy for FileStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::File
    }

    fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()> {
        let Artifact::File(file) = artifact else {
            return Err(mismatch(self.kind(), artifact));
        };
        let lines = match &file.body {
            FileBody::Syntax(node) => node.render(),
            FileBody::Lines(lines) => lines.clone(),
        };
        session.context.set(file.destination(), lines);
        Ok(())
    }
}

/// Renders a named template with the artifact's tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStrategy;

impl ArtifactStrategy for TemplateStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Template
    }

    fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()> {
        let Artifact::Template(file) = artifact else {
            return Err(mismatch(self.kind(), artifact));
        };
        let lines = session
            .services()
            .render_template(&file.template, &file.tokens)?;
        session.context.set(file.destination(), lines);
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectTokens<'a> {
    name: &'a str,
    namespace: &'a str,
    sdk: &'a str,
    target_framework: &'a str,
    packages: &'a [PackageRef],
    references: Vec<String>,
}

/// Writes a `.csproj` from the `csproj` template.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectStrategy;

impl ArtifactStrategy for ProjectStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Project
    }

    fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()> {
        let Artifact::Project(project) = artifact else {
            return Err(mismatch(self.kind(), artifact));
        };
        let services = session.services();
        let tokens = Tokens::from_object(
            &services.inflector,
            &ProjectTokens {
                name: &project.name,
                namespace: &project.namespace,
                sdk: &project.sdk,
                target_framework: &project.target_framework,
                packages: &project.packages,
                references: project
                    .references
                    .iter()
                    .map(|r| relative_path(&project.directory, r))
                    .collect(),
            },
        );
        let lines = services.render_template(CSPROJ_TEMPLATE, &tokens)?;
        session.context.set(project.destination(), lines);
        Ok(())
    }
}

/// Writes a `.slnx` listing member projects relative to the solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionStrategy;

impl ArtifactStrategy for SolutionStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Solution
    }

    fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()> {
        let Artifact::Solution(solution) = artifact else {
            return Err(mismatch(self.kind(), artifact));
        };
        let projects: Vec<String> = solution
            .projects()
            .map(|p| relative_path(solution.directory(), &p.destination()))
            .collect();
        let tokens = Tokens::new()
            .with("name", solution.name.as_str())
            .with("projects", projects);
        let lines = session
            .services()
            .render_template(SLNX_TEMPLATE, &tokens)?;
        session.context.set(solution.destination(), lines);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{
        dispatch::{Project, Solution, SourceFile, TemplateFile},
        session::Services,
        syntax::ClassBuilder,
        template::EmbeddedTemplates,
    };

    fn text(session: &Session<'_>, path: &str) -> String {
        session.context.get(Path::new(path)).unwrap().join("\n")
    }

    #[test]
    fn test_file_strategy_renders_syntax() {
        let services = Services::new();
        let mut session = Session::new(&services);
        let class = ClassBuilder::new("Foo").namespace("Shop").build().unwrap();

        FileStrategy
            .generate(&SourceFile::syntax("src", class).into(), &mut session)
            .unwrap();

        assert_eq!(
            text(&session, "src/Foo.cs"),
            "namespace Shop\n{\n    public class Foo { }\n}"
        );
    }

    #[test]
    fn test_strategy_rejects_other_kinds() {
        let services = Services::new();
        let mut session = Session::new(&services);
        let err = FileStrategy
            .generate(&Project::new("Shop", "").into(), &mut session)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "strategy for 'file' was handed a 'project' artifact"
        );
    }

    #[test]
    fn test_template_strategy() {
        let mut templates = EmbeddedTemplates::new();
        templates.insert("readme", "# {{ titleTitleCase }}\n\n{{ summary }}");
        let services = Services::with_templates(templates);
        let mut session = Session::new(&services);

        let tokens = Tokens::new()
            .with_identifier(&services.inflector, "title", "order_service")
            .with("summary", "Orders.");
        TemplateStrategy
            .generate(
                &TemplateFile::new("readme", "docs", "README.md", tokens).into(),
                &mut session,
            )
            .unwrap();

        assert_eq!(text(&session, "docs/README.md"), "# Order Service\n\nOrders.");
    }

    #[test]
    fn test_template_strategy_missing_template() {
        let services = Services::with_templates(EmbeddedTemplates::new());
        let mut session = Session::new(&services);
        let file = TemplateFile::new("readme", "", "README.md", Tokens::new());

        let err = TemplateStrategy
            .generate(&file.into(), &mut session)
            .unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { name } if name == "readme"));
        assert!(session.context.is_empty());
    }

    #[test]
    fn test_project_strategy() {
        let services = Services::new();
        let mut session = Session::new(&services);
        let core = Project::new("Shop.Core", "src/Shop.Core");
        let api = Project::new("Shop.Api", "src/Shop.Api")
            .web()
            .package("MediatR", "12.4.1")
            .reference(&core);

        ProjectStrategy.generate(&api.into(), &mut session).unwrap();

        insta::assert_snapshot!(text(&session, "src/Shop.Api/Shop.Api.csproj"), @r#"
        <Project Sdk="Microsoft.NET.Sdk.Web">

          <PropertyGroup>
            <TargetFramework>net8.0</TargetFramework>
            <Nullable>enable</Nullable>
            <ImplicitUsings>enable</ImplicitUsings>
            <RootNamespace>Shop.Api</RootNamespace>
            <AssemblyName>Shop.Api</AssemblyName>
          </PropertyGroup>

          <ItemGroup>
            <PackageReference Include="MediatR" Version="12.4.1" />
          </ItemGroup>

          <ItemGroup>
            <ProjectReference Include="../Shop.Core/Shop.Core.csproj" />
          </ItemGroup>

        </Project>
        "#);
    }

    #[test]
    fn test_solution_strategy() {
        let services = Services::new();
        let mut session = Session::new(&services);
        let solution = Solution::new("Shop", "out")
            .member(Project::new("Shop.Core", "out/src/Shop.Core"))
            .member(SourceFile::lines("out", "README", "md", vec![]))
            .member(Project::new("Shop.Api", "out/src/Shop.Api"));

        SolutionStrategy
            .generate(&solution.into(), &mut session)
            .unwrap();

        insta::assert_snapshot!(text(&session, "out/Shop.slnx"), @r#"
        <Solution>
          <Project Path="src/Shop.Core/Shop.Core.csproj" />
          <Project Path="src/Shop.Api/Shop.Api.csproj" />
        </Solution>
        "#);
    }
}
