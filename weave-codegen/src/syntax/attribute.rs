//! Attributes: `[Name(args)]`.

use std::fmt;

use super::validate_qualified;
use crate::Result;

/// An argument to an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeArg {
    /// Positional argument, rendered verbatim.
    Positional(String),
    /// Named argument: `Name = value`.
    Named(String, String),
}

impl fmt::Display for AttributeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => f.write_str(value),
            Self::Named(name, value) => write!(f, "{} = {}", name, value),
        }
    }
}

/// An attribute applied to a declaration or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNode {
    pub name: String,
    pub args: Vec<AttributeArg>,
}

impl AttributeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument rendered verbatim.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(AttributeArg::Positional(value.into()));
        self
    }

    /// Add a positional string literal argument.
    pub fn string_arg(mut self, value: impl AsRef<str>) -> Self {
        self.args
            .push(AttributeArg::Positional(format!("\"{}\"", value.as_ref())));
        self
    }

    /// Add a named argument rendered verbatim.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args
            .push(AttributeArg::Named(name.into(), value.into()));
        self
    }
}

impl fmt::Display for AttributeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "[{}]", self.name);
        }
        write!(f, "[{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")]")
    }
}

/// Builder for [`AttributeNode`].
#[derive(Debug, Clone)]
pub struct AttributeBuilder {
    node: AttributeNode,
}

impl AttributeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: AttributeNode::new(name),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.node = self.node.arg(value);
        self
    }

    pub fn string_arg(mut self, value: impl AsRef<str>) -> Self {
        self.node = self.node.string_arg(value);
        self
    }

    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node = self.node.named(name, value);
        self
    }

    pub fn build(self) -> Result<AttributeNode> {
        validate_qualified(&self.node.name, "attribute")?;
        Ok(self.node)
    }
}
