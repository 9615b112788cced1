//! Services shared by a generation run and the per-session state.

use weave_core::{BufferPool, Inflector};

use crate::{
    Context, Result,
    template::{EmbeddedTemplates, TemplateLocator, TemplateProcessor, Tokens},
};

/// Process-scoped services, constructed once and passed by reference.
pub struct Services {
    pub inflector: Inflector,
    pub pool: BufferPool,
    pub processor: TemplateProcessor,
    templates: Box<dyn TemplateLocator>,
}

impl Services {
    /// Services backed by the built-in templates.
    pub fn new() -> Self {
        Self::with_templates(EmbeddedTemplates::builtin())
    }

    pub fn with_templates(templates: impl TemplateLocator + 'static) -> Self {
        Self {
            inflector: Inflector::new(),
            pool: BufferPool::new(),
            processor: TemplateProcessor::new(),
            templates: Box::new(templates),
        }
    }

    pub fn templates(&self) -> &dyn TemplateLocator {
        self.templates.as_ref()
    }

    /// Look up the template `name` and render it to lines.
    pub fn render_template(&self, name: &str, tokens: &Tokens) -> Result<Vec<String>> {
        let source = self.templates.get(name)?;
        self.processor.process_lines(&source, tokens, &[])
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

/// One generation session: an output context plus the shared services.
pub struct Session<'a> {
    pub context: Context,
    services: &'a Services,
}

impl<'a> Session<'a> {
    pub fn new(services: &'a Services) -> Self {
        Self {
            context: Context::new(),
            services,
        }
    }

    pub fn services(&self) -> &'a Services {
        self.services
    }

    /// End the session, keeping its output.
    pub fn into_context(self) -> Context {
        self.context
    }
}
