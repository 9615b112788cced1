use thiserror::Error;

/// Result type for weave-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("failed to render template")]
    Template(#[from] minijinja::Error),

    #[error("no strategy registered for artifact kind '{kind}'")]
    UnregisteredArtifact { kind: String },

    #[error("strategy for '{expected}' was handed a '{found}' artifact")]
    ArtifactMismatch { expected: String, found: String },

    #[error("invalid {context} name '{name}'")]
    InvalidIdentifier { name: String, context: String },

    #[error("type '{type_name}' declares namespace '{declared}' but is placed in '{namespace}'")]
    NamespaceMismatch {
        type_name: String,
        declared: String,
        namespace: String,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
