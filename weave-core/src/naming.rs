//! C# naming conventions.

use crate::{to_camel_case, to_pascal_case};

/// Language-specific naming conventions.
///
/// Defines how identifiers are transformed for each kind of declaration and
/// how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name to a type name (e.g., "line_item" -> "LineItem")
    pub to_type: fn(&str) -> String,
    /// Transform a name to a public member name
    pub to_member: fn(&str) -> String,
    /// Transform a name to a parameter or local name
    pub to_parameter: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn member_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_member)(name))
    }

    pub fn parameter_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_parameter)(name))
    }

    /// Backing field for a parameter: `mediator` -> `_mediator`.
    pub fn field_name(&self, name: &str) -> String {
        format!("_{}", (self.to_parameter)(name))
    }

    /// Parameter name for an injected dependency type.
    ///
    /// Generic arguments are dropped and an interface `I` prefix is stripped:
    /// `IMediator` -> `mediator`, `ILogger<Foo>` -> `logger`.
    pub fn dependency_name(&self, ty: &str) -> String {
        let base = ty.split('<').next().unwrap_or(ty);
        let mut chars = base.chars();
        let stripped = match (chars.next(), chars.next()) {
            (Some('I'), Some(second)) if second.is_uppercase() => &base[1..],
            _ => base,
        };
        self.parameter_name(stripped)
    }
}

fn escape_with_at(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_member: to_pascal_case,
    to_parameter: to_camel_case,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_with_at,
};
