//! Looking templates up by name.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Name of the built-in project file template.
pub const CSPROJ_TEMPLATE: &str = "csproj";
/// Name of the built-in solution file template.
pub const SLNX_TEMPLATE: &str = "slnx";

/// Source of named templates.
pub trait TemplateLocator {
    /// The template source for `name`, or [`Error::TemplateNotFound`].
    fn get(&self, name: &str) -> Result<String>;
}

/// In-memory template registry.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplates {
    templates: IndexMap<String, String>,
}

impl EmbeddedTemplates {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in project and solution templates.
    pub fn builtin() -> Self {
        let mut templates = Self::new();
        templates.insert(CSPROJ_TEMPLATE, include_str!("../../templates/csproj.j2"));
        templates.insert(SLNX_TEMPLATE, include_str!("../../templates/slnx.j2"));
        templates
    }

    /// Register a template, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) -> Option<String> {
        self.templates.insert(name.into(), source.into())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl TemplateLocator for EmbeddedTemplates {
    fn get(&self, name: &str) -> Result<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

/// Treats missing templates as empty.
///
/// Wraps another locator; a lookup miss is logged and yields empty text.
/// Other failures pass through.
#[derive(Debug, Clone)]
pub struct OptionalTemplates<L> {
    inner: L,
}

impl<L: TemplateLocator> OptionalTemplates<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: TemplateLocator> TemplateLocator for OptionalTemplates<L> {
    fn get(&self, name: &str) -> Result<String> {
        match self.inner.get(name) {
            Err(Error::TemplateNotFound { name }) => {
                tracing::warn!(template = %name, "template not found, using empty text");
                Ok(String::new())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates() {
        let templates = EmbeddedTemplates::builtin();
        assert_eq!(templates.names().collect::<Vec<_>>(), vec!["csproj", "slnx"]);
        assert!(templates.get(CSPROJ_TEMPLATE).unwrap().contains("<Project Sdk="));
    }

    #[test]
    fn test_missing_template_names_key() {
        let err = EmbeddedTemplates::new().get("Dockerfile").unwrap_err();
        assert_eq!(err.to_string(), "template 'Dockerfile' not found");
    }

    #[test]
    fn test_optional_templates_fall_back_to_empty() {
        let mut inner = EmbeddedTemplates::new();
        inner.insert("readme", "# {{ name }}");
        let templates = OptionalTemplates::new(inner);

        assert_eq!(templates.get("readme").unwrap(), "# {{ name }}");
        assert_eq!(templates.get("Dockerfile").unwrap(), "");
    }
}
