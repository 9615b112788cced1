//! Namespaces holding several types in one file.

use std::path::{Path, PathBuf};

use super::{TypeDecl, UsingDirective, render::compilation_unit, types::merge_usings, validate_qualified};
use crate::{
    Context, Error, Result,
    builder::{CodeFragment, Renderable},
};

/// A block namespace and the types declared in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceNode {
    pub name: String,
    pub usings: Vec<UsingDirective>,
    pub types: Vec<TypeDecl>,
}

impl NamespaceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usings: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Own usings followed by those of every contained type.
    pub fn all_usings(&self) -> Vec<UsingDirective> {
        let mut usings = self.usings.clone();
        for ty in &self.types {
            merge_usings(&mut usings, &ty.all_usings());
        }
        usings
    }

    /// Named after the first type, or the namespace when it holds none.
    pub fn file_name(&self) -> String {
        match self.types.first() {
            Some(ty) => format!("{}.cs", ty.name()),
            None => format!("{}.cs", self.name),
        }
    }

    pub fn emit(&self, directory: &Path, context: &mut Context) -> PathBuf {
        let path = directory.join(self.file_name());
        context.set(path.clone(), self.render());
        path
    }
}

impl Renderable for NamespaceNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = CodeFragment::separated(self.types.iter().map(TypeDecl::type_fragments));
        compilation_unit(&self.all_usings(), Some(&self.name), body)
    }
}

/// Builder for [`NamespaceNode`].
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    node: NamespaceNode,
}

impl NamespaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: NamespaceNode::new(name),
        }
    }

    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        let using = UsingDirective::new(namespace);
        merge_usings(&mut self.node.usings, [&using]);
        self
    }

    pub fn declare(mut self, decl: impl Into<TypeDecl>) -> Self {
        self.node.types.push(decl.into());
        self
    }

    /// Fails when a declared type names a namespace other than this one.
    pub fn build(self) -> Result<NamespaceNode> {
        validate_qualified(&self.node.name, "namespace")?;
        for ty in &self.node.types {
            match ty.namespace() {
                Some(declared) if declared != self.node.name => {
                    return Err(Error::NamespaceMismatch {
                        type_name: ty.name().to_string(),
                        declared: declared.to_string(),
                        namespace: self.node.name.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ClassBuilder, InterfaceBuilder};

    #[test]
    fn test_namespace_with_types() {
        let ns = NamespaceBuilder::new("Shop.Core")
            .declare(
                ClassBuilder::new("Customer")
                    .using("System")
                    .build()
                    .unwrap(),
            )
            .declare(
                InterfaceBuilder::new("ICustomerRepository")
                    .using("System")
                    .using("System.Threading")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(ns.file_name(), "Customer.cs");
        assert_eq!(
            ns.render(),
            vec![
                "using System;",
                "using System.Threading;",
                "",
                "namespace Shop.Core",
                "{",
                "    public class Customer { }",
                "",
                "    public interface ICustomerRepository { }",
                "}",
            ]
        );
    }

    #[test]
    fn test_empty_namespace() {
        let ns = NamespaceBuilder::new("Shop").build().unwrap();
        assert_eq!(ns.file_name(), "Shop.cs");
        assert_eq!(ns.render(), vec!["namespace Shop", "{", "}"]);
    }

    #[test]
    fn test_type_namespace_must_match() {
        let err = NamespaceBuilder::new("Shop.Core")
            .declare(
                ClassBuilder::new("Customer")
                    .namespace("Shop.Billing")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "type 'Customer' declares namespace 'Shop.Billing' but is placed in 'Shop.Core'"
        );

        let err = NamespaceBuilder::new("Shop.Core")
            .declare(
                InterfaceBuilder::new("ICustomerRepository")
                    .namespace("Shop")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::NamespaceMismatch { .. }));
    }

    #[test]
    fn test_type_namespace_matching_is_accepted() {
        let ns = NamespaceBuilder::new("Shop.Core")
            .declare(
                ClassBuilder::new("Customer")
                    .namespace("Shop.Core")
                    .build()
                    .unwrap(),
            )
            .declare(ClassBuilder::new("Order").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(ns.types.len(), 2);
        assert_eq!(ns.render()[0], "namespace Shop.Core");
    }

    #[test]
    fn test_invalid_namespace() {
        assert!(NamespaceBuilder::new("Shop.").build().is_err());
    }
}
