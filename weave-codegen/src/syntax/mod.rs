//! C# syntax model and builders.
//!
//! Nodes are plain records that render through [`Renderable`]; builders are
//! consumed by `build()`, which validates names and returns the node. Type
//! declarations always lay out their members in one fixed order:
//! constructors, fields, properties, methods, nested types.

mod attribute;
mod class;
mod constructor;
mod field;
mod interface;
mod method;
mod namespace;
mod property;
mod render;
mod types;

use std::path::{Path, PathBuf};

pub use attribute::{AttributeArg, AttributeBuilder, AttributeNode};
pub use class::{ClassBuilder, ClassNode};
pub use constructor::{ConstructorBuilder, ConstructorNode, ConstructorShape, Dependency};
pub use field::FieldNode;
pub use interface::{InterfaceBuilder, InterfaceNode};
pub use method::{MethodBody, MethodBuilder, MethodNode};
pub use namespace::{NamespaceBuilder, NamespaceNode};
pub use property::{Accessors, PropertyBuilder, PropertyNode};
pub use types::{ParamNode, TypeRef, UsingDirective, Visibility};

use crate::{
    Context, Error, Result,
    builder::{CodeFragment, Renderable},
};

/// A type declaration that can be nested or held by a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    Class(ClassNode),
    Interface(InterfaceNode),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Interface(i) => &i.name,
        }
    }

    /// The namespace the declaration names for itself, if any.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Class(c) => c.namespace.as_deref(),
            Self::Interface(i) => i.namespace.as_deref(),
        }
    }

    pub fn type_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Class(c) => c.type_fragments(),
            Self::Interface(i) => i.type_fragments(),
        }
    }

    pub fn all_usings(&self) -> Vec<UsingDirective> {
        match self {
            Self::Class(c) => c.all_usings(),
            Self::Interface(i) => i.usings.clone(),
        }
    }
}

impl From<ClassNode> for TypeDecl {
    fn from(node: ClassNode) -> Self {
        Self::Class(node)
    }
}

impl From<InterfaceNode> for TypeDecl {
    fn from(node: InterfaceNode) -> Self {
        Self::Interface(node)
    }
}

/// A node that renders to a whole source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Class(ClassNode),
    Interface(InterfaceNode),
    Namespace(NamespaceNode),
}

impl SyntaxNode {
    /// The conventional file name, `Name.cs`.
    pub fn file_name(&self) -> String {
        match self {
            Self::Class(c) => c.file_name(),
            Self::Interface(i) => i.file_name(),
            Self::Namespace(n) => n.file_name(),
        }
    }

    /// The file stem, without extension.
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Interface(i) => &i.name,
            Self::Namespace(n) => n.types.first().map_or(n.name.as_str(), TypeDecl::name),
        }
    }

    pub fn emit(&self, directory: &Path, context: &mut Context) -> PathBuf {
        match self {
            Self::Class(c) => c.emit(directory, context),
            Self::Interface(i) => i.emit(directory, context),
            Self::Namespace(n) => n.emit(directory, context),
        }
    }
}

impl Renderable for SyntaxNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Class(c) => c.to_fragments(),
            Self::Interface(i) => i.to_fragments(),
            Self::Namespace(n) => n.to_fragments(),
        }
    }
}

impl From<ClassNode> for SyntaxNode {
    fn from(node: ClassNode) -> Self {
        Self::Class(node)
    }
}

impl From<InterfaceNode> for SyntaxNode {
    fn from(node: InterfaceNode) -> Self {
        Self::Interface(node)
    }
}

impl From<NamespaceNode> for SyntaxNode {
    fn from(node: NamespaceNode) -> Self {
        Self::Namespace(node)
    }
}

/// Check that `name` is a C# identifier, optionally `@`-escaped.
pub(crate) fn validate_identifier(name: &str, context: &str) -> Result<()> {
    let bare = name.strip_prefix('@').unwrap_or(name);
    let mut chars = bare.chars();
    let valid = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        })
    }
}

/// Check a dotted name such as `Shop.Core` or `System.Obsolete`.
pub(crate) fn validate_qualified(name: &str, context: &str) -> Result<()> {
    name.split('.')
        .try_for_each(|segment| validate_identifier(segment, context))
        .map_err(|_| Error::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("Customer", "class").is_ok());
        assert!(validate_identifier("_id", "field").is_ok());
        assert!(validate_identifier("@event", "parameter").is_ok());
        assert!(validate_identifier("Größe", "property").is_ok());

        assert!(validate_identifier("", "class").is_err());
        assert!(validate_identifier("@", "class").is_err());
        assert!(validate_identifier("2Fa", "class").is_err());
        assert!(validate_identifier("get-by-id", "method").is_err());
    }

    #[test]
    fn test_invalid_identifier_names_value_and_context() {
        let err = validate_qualified("Shop Core.Api", "namespace").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid namespace name 'Shop Core.Api'"
        );
    }

    #[test]
    fn test_syntax_node_dispatch() {
        let node = SyntaxNode::from(ClassBuilder::new("Foo").build().unwrap());
        assert_eq!(node.file_name(), "Foo.cs");
        assert_eq!(node.name(), "Foo");
        assert_eq!(node.render(), vec!["public class Foo { }"]);
    }
}
