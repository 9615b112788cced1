//! Artifact dispatch.
//!
//! An [`Artifact`] is resolved by its [`ArtifactKind`] to exactly one
//! registered [`ArtifactStrategy`]. Kinds defined in other crates implement
//! [`CustomArtifact`] and register a strategy under `ArtifactKind::Custom`;
//! [`ArtifactFactory::generate`] itself does not change.

mod artifact;
mod factory;
mod strategies;

pub use artifact::{
    Artifact, ArtifactKind, CustomArtifact, DEFAULT_SDK, DEFAULT_TARGET_FRAMEWORK, FileBody,
    PackageRef, Project, Solution, SourceFile, TemplateFile, WEB_SDK,
};
pub use factory::{ArtifactFactory, ArtifactStrategy};
pub use strategies::{FileStrategy, ProjectStrategy, SolutionStrategy, TemplateStrategy};
