//! Generateable output units.

use std::{
    any::Any,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;

use crate::{syntax::SyntaxNode, template::Tokens};

/// Discriminant of [`Artifact`], the key strategies register under.
///
/// `Custom` kinds are keyed by name and belong to artifacts defined outside
/// this crate, see [`CustomArtifact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    File,
    Template,
    Project,
    Solution,
    Custom(&'static str),
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Template => "template",
            Self::Project => "project",
            Self::Solution => "solution",
            Self::Custom(name) => *name,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An artifact type defined outside this crate.
///
/// Wrap it with [`Artifact::custom`] and register an
/// [`ArtifactStrategy`](super::ArtifactStrategy) whose kind is
/// `ArtifactKind::Custom(self.kind())`. The strategy gets the concrete value
/// back through [`Artifact::downcast_ref`].
pub trait CustomArtifact: fmt::Debug + Send + Sync + 'static {
    /// Name of the kind; must not clash with another custom kind.
    fn kind(&self) -> &'static str;

    fn destination(&self) -> PathBuf;

    fn children(&self) -> &[Artifact] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;
}

/// Anything the factory can generate.
#[derive(Debug, Clone)]
pub enum Artifact {
    File(SourceFile),
    Template(TemplateFile),
    Project(Project),
    Solution(Solution),
    Custom(Arc<dyn CustomArtifact>),
}

impl Artifact {
    pub fn custom(artifact: impl CustomArtifact) -> Self {
        Self::Custom(Arc::new(artifact))
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::File(_) => ArtifactKind::File,
            Self::Template(_) => ArtifactKind::Template,
            Self::Project(_) => ArtifactKind::Project,
            Self::Solution(_) => ArtifactKind::Solution,
            Self::Custom(c) => ArtifactKind::Custom(c.kind()),
        }
    }

    /// Artifacts generated after this one.
    pub fn children(&self) -> &[Artifact] {
        match self {
            Self::File(_) | Self::Template(_) => &[],
            Self::Project(p) => &p.files,
            Self::Solution(s) => &s.members,
            Self::Custom(c) => c.children(),
        }
    }

    /// Where the artifact's own output lands.
    pub fn destination(&self) -> PathBuf {
        match self {
            Self::File(f) => f.destination(),
            Self::Template(t) => t.destination(),
            Self::Project(p) => p.destination(),
            Self::Solution(s) => s.destination(),
            Self::Custom(c) => c.destination(),
        }
    }

    /// The custom artifact as `T`, if that is what this holds.
    pub fn downcast_ref<T: CustomArtifact>(&self) -> Option<&T> {
        match self {
            Self::Custom(c) => c.as_any().downcast_ref(),
            _ => None,
        }
    }
}

impl From<SourceFile> for Artifact {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

impl From<TemplateFile> for Artifact {
    fn from(file: TemplateFile) -> Self {
        Self::Template(file)
    }
}

impl From<Project> for Artifact {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}

impl From<Solution> for Artifact {
    fn from(solution: Solution) -> Self {
        Self::Solution(solution)
    }
}

/// Contents of a [`SourceFile`].
#[derive(Debug, Clone)]
pub enum FileBody {
    Syntax(SyntaxNode),
    Lines(Vec<String>),
}

/// A single file rendered from a syntax node or given verbatim.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub directory: PathBuf,
    pub extension: String,
    pub body: FileBody,
}

impl SourceFile {
    /// A `.cs` file named after the node.
    pub fn syntax(directory: impl Into<PathBuf>, node: impl Into<SyntaxNode>) -> Self {
        let node = node.into();
        Self {
            name: node.name().to_string(),
            directory: directory.into(),
            extension: "cs".to_string(),
            body: FileBody::Syntax(node),
        }
    }

    pub fn lines(
        directory: impl Into<PathBuf>,
        name: impl Into<String>,
        extension: impl Into<String>,
        lines: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            extension: extension.into(),
            body: FileBody::Lines(lines),
        }
    }

    pub fn destination(&self) -> PathBuf {
        if self.extension.is_empty() {
            self.directory.join(&self.name)
        } else {
            self.directory
                .join(format!("{}.{}", self.name, self.extension))
        }
    }
}

/// A file rendered from a named template.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub template: String,
    pub directory: PathBuf,
    pub file_name: String,
    pub tokens: Tokens,
}

impl TemplateFile {
    pub fn new(
        template: impl Into<String>,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
        tokens: Tokens,
    ) -> Self {
        Self {
            template: template.into(),
            directory: directory.into(),
            file_name: file_name.into(),
            tokens,
        }
    }

    pub fn destination(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// A NuGet package reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

pub const DEFAULT_SDK: &str = "Microsoft.NET.Sdk";
pub const WEB_SDK: &str = "Microsoft.NET.Sdk.Web";
pub const DEFAULT_TARGET_FRAMEWORK: &str = "net8.0";

/// A project file plus the files generated inside it.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub directory: PathBuf,
    pub namespace: String,
    pub sdk: String,
    pub target_framework: String,
    pub packages: Vec<PackageRef>,
    /// Paths of referenced project files.
    pub references: Vec<PathBuf>,
    pub files: Vec<Artifact>,
}

impl Project {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self {
            namespace: name.clone(),
            name,
            directory: directory.into(),
            sdk: DEFAULT_SDK.to_string(),
            target_framework: DEFAULT_TARGET_FRAMEWORK.to_string(),
            packages: Vec::new(),
            references: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn web(mut self) -> Self {
        self.sdk = WEB_SDK.to_string();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn target_framework(mut self, framework: impl Into<String>) -> Self {
        self.target_framework = framework.into();
        self
    }

    pub fn package(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.packages.push(PackageRef::new(name, version));
        self
    }

    /// Reference another project by its project file.
    pub fn reference(mut self, project: &Project) -> Self {
        self.references.push(project.destination());
        self
    }

    pub fn file(mut self, file: impl Into<Artifact>) -> Self {
        self.files.push(file.into());
        self
    }

    pub fn destination(&self) -> PathBuf {
        self.directory.join(format!("{}.csproj", self.name))
    }
}

/// A solution file listing its member projects.
#[derive(Debug, Clone)]
pub struct Solution {
    pub name: String,
    pub directory: PathBuf,
    /// Projects are listed in the solution; other members are only generated.
    pub members: Vec<Artifact>,
}

impl Solution {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: impl Into<Artifact>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.members.iter().filter_map(|m| match m {
            Artifact::Project(p) => Some(p),
            _ => None,
        })
    }

    pub fn destination(&self) -> PathBuf {
        self.directory.join(format!("{}.slnx", self.name))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
