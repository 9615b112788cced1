//! Template substitution.
//!
//! [`TemplateProcessor`] renders minijinja templates against [`Tokens`];
//! [`TemplateLocator`] implementations supply template sources by name.

mod flatten;
mod locator;
mod processor;
mod tokens;

pub use locator::{
    CSPROJ_TEMPLATE, EmbeddedTemplates, OptionalTemplates, SLNX_TEMPLATE, TemplateLocator,
};
pub use processor::TemplateProcessor;
pub use tokens::Tokens;
