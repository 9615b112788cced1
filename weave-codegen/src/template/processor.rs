//! Rendering templates against token dictionaries.

use minijinja::Environment;
use serde::Serialize;
use weave_core::Inflector;

use super::Tokens;
use crate::Result;

/// Substitutes tokens into templates.
///
/// Templates use minijinja syntax: `{{ name }}` interpolation, `{% for %}`
/// iteration and `{% if %}` conditionals. Lines holding only a block tag
/// leave no trace in the output, and a single trailing newline is dropped.
/// Unknown variables render as empty text.
#[derive(Debug)]
pub struct TemplateProcessor {
    env: Environment<'static>,
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProcessor {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }

    /// Render `template` with `tokens`, minus the `ignore` keys.
    ///
    /// ```
    /// use weave_codegen::template::{TemplateProcessor, Tokens};
    ///
    /// let tokens = Tokens::new().with("Title", "Foo");
    /// let text = TemplateProcessor::new()
    ///     .process("# {{ Title }}", &tokens, &[])
    ///     .unwrap();
    /// assert_eq!(text, "# Foo");
    /// ```
    pub fn process(&self, template: &str, tokens: &Tokens, ignore: &[&str]) -> Result<String> {
        let text = if ignore.is_empty() {
            self.env.render_str(template, tokens)?
        } else {
            self.env.render_str(template, tokens.without(ignore))?
        };
        Ok(text)
    }

    /// Flatten `value` into tokens and render `template` with them.
    pub fn process_object<T: Serialize + ?Sized>(
        &self,
        inflector: &Inflector,
        template: &str,
        value: &T,
    ) -> Result<String> {
        self.process(template, &Tokens::from_object(inflector, value), &[])
    }

    /// [`process`](Self::process), split into lines.
    pub fn process_lines(
        &self,
        template: &str,
        tokens: &Tokens,
        ignore: &[&str],
    ) -> Result<Vec<String>> {
        let text = self.process(template, tokens, ignore)?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_interpolation() {
        let tokens = Tokens::new().with("Title", "Foo");
        let text = TemplateProcessor::new()
            .process("<h1>{{ Title }}</h1>", &tokens, &[])
            .unwrap();
        assert!(text.contains("Foo"));
    }

    #[test]
    fn test_iteration_and_conditionals() {
        let tokens = Tokens::new()
            .with("items", json!(["Customer", "Order"]))
            .with("header", true);
        let template = "{% if header %}\n// items\n{% endif %}\n{% for item in items %}\n- {{ item }}\n{% endfor %}\n";

        let lines = TemplateProcessor::new()
            .process_lines(template, &tokens, &[])
            .unwrap();
        assert_eq!(lines, vec!["// items", "- Customer", "- Order"]);
    }

    #[test]
    fn test_ignore_applies_to_one_call() {
        let processor = TemplateProcessor::new();
        let tokens = Tokens::new().with("name", "Shop").with("suffix", ".Api");

        let trimmed = processor
            .process("{{ name }}{{ suffix }}", &tokens, &["suffix"])
            .unwrap();
        assert_eq!(trimmed, "Shop");

        let full = processor
            .process("{{ name }}{{ suffix }}", &tokens, &[])
            .unwrap();
        assert_eq!(full, "Shop.Api");
    }

    #[test]
    fn test_process_object_uses_derived_keys() {
        #[derive(Serialize)]
        struct Entity {
            name: &'static str,
        }

        let inflector = Inflector::new();
        let text = TemplateProcessor::new()
            .process_object(
                &inflector,
                "public DbSet<{{ namePascalCase }}> {{ namePascalCasePlural }} { get; set; }",
                &Entity { name: "category" },
            )
            .unwrap();
        assert_eq!(
            text,
            "public DbSet<Category> Categories { get; set; }"
        );
    }

    #[test]
    fn test_process_object_survives_broken_member() {
        struct Unserializable;

        impl Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(
                &self,
                _serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("requires arguments"))
            }
        }

        #[derive(Serialize)]
        struct Entity {
            name: &'static str,
            note: Unserializable,
        }

        let inflector = Inflector::new();
        let entity = Entity {
            name: "customer",
            note: Unserializable,
        };
        let processor = TemplateProcessor::new();

        let text = processor
            .process_object(&inflector, "{{ namePascalCase }}", &entity)
            .unwrap();
        assert_eq!(text, "Customer");

        let text = processor
            .process_object(&inflector, "{{ name }}|{{ note | length }}", &entity)
            .unwrap();
        assert_eq!(text, "customer|0");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = TemplateProcessor::new().process("{% for %}", &Tokens::new(), &[]);
        assert!(matches!(result, Err(crate::Error::Template(_))));
    }
}
