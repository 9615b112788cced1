//! Kind-to-strategy registry.

use indexmap::IndexMap;

use super::{
    Artifact, ArtifactKind, FileStrategy, ProjectStrategy, SolutionStrategy, TemplateStrategy,
};
use crate::{Error, Result, session::Session};

/// Renders one kind of artifact into a session.
pub trait ArtifactStrategy {
    /// The kind this strategy handles.
    fn kind(&self) -> ArtifactKind;

    /// Render `artifact`'s own output; children are handled by the factory.
    fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()>;
}

/// Dispatches artifacts to their registered strategies.
///
/// ```
/// use weave_codegen::{
///     dispatch::{ArtifactFactory, SourceFile},
///     session::{Services, Session},
///     syntax::ClassBuilder,
/// };
///
/// let services = Services::new();
/// let mut session = Session::new(&services);
/// let factory = ArtifactFactory::with_defaults();
///
/// let class = ClassBuilder::new("Foo").build().unwrap();
/// factory
///     .generate(&SourceFile::syntax("src", class).into(), &mut session)
///     .unwrap();
/// assert_eq!(session.context.len(), 1);
/// ```
#[derive(Default)]
pub struct ArtifactFactory {
    strategies: IndexMap<ArtifactKind, Box<dyn ArtifactStrategy>>,
}

impl ArtifactFactory {
    /// A factory with no strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory with the built-in strategy for every kind.
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register(FileStrategy);
        factory.register(TemplateStrategy);
        factory.register(ProjectStrategy);
        factory.register(SolutionStrategy);
        factory
    }

    /// Register `strategy` under its kind, replacing any previous one.
    pub fn register(&mut self, strategy: impl ArtifactStrategy + 'static) -> &mut Self {
        self.strategies.insert(strategy.kind(), Box::new(strategy));
        self
    }

    pub fn is_registered(&self, kind: ArtifactKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// Generate `artifact`, then each of its children in order.
    pub fn generate(&self, artifact: &Artifact, session: &mut Session<'_>) -> Result<()> {
        let kind = artifact.kind();
        let strategy = self
            .strategies
            .get(&kind)
            .ok_or_else(|| Error::UnregisteredArtifact {
                kind: kind.to_string(),
            })?;

        tracing::debug!(%kind, destination = %artifact.destination().display(), "generating artifact");
        strategy.generate(artifact, session)?;

        for child in artifact.children() {
            self.generate(child, session)?;
        }
        Ok(())
    }
}
