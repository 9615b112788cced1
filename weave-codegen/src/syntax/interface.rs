//! Interfaces.

use std::path::{Path, PathBuf};

use super::{
    AttributeNode, MethodNode, PropertyNode, TypeRef, UsingDirective, Visibility,
    render::{base_list, compilation_unit, packed, type_fragments, type_parameters},
    types::merge_usings,
    validate_identifier, validate_qualified,
};
use crate::{
    Context, Result,
    builder::{CodeFragment, Renderable},
};

/// An interface declaration. Members render as bare signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceNode {
    pub name: String,
    pub visibility: Visibility,
    pub is_partial: bool,
    pub type_parameters: Vec<String>,
    pub usings: Vec<UsingDirective>,
    pub namespace: Option<String>,
    pub attributes: Vec<AttributeNode>,
    pub extends: Vec<TypeRef>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
}

impl InterfaceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_partial: false,
            type_parameters: Vec::new(),
            usings: Vec::new(),
            namespace: None,
            attributes: Vec::new(),
            extends: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.methods.is_empty()
    }

    pub fn declaration(&self) -> String {
        let partial = if self.is_partial { " partial" } else { "" };
        format!(
            "{}{} interface {}{}{}",
            self.visibility,
            partial,
            self.name,
            type_parameters(&self.type_parameters),
            base_list(None, &self.extends)
        )
    }

    pub fn type_fragments(&self) -> Vec<CodeFragment> {
        let sections = vec![
            packed(&self.properties, |p| vec![CodeFragment::Line(p.signature())]),
            packed(&self.methods, MethodNode::interface_fragments),
        ];
        type_fragments(&self.attributes, self.declaration(), sections)
    }

    pub fn file_name(&self) -> String {
        format!("{}.cs", self.name)
    }

    /// Render into `context` at `directory/Name.cs`.
    pub fn emit(&self, directory: &Path, context: &mut Context) -> PathBuf {
        let path = directory.join(self.file_name());
        context.set(path.clone(), self.render());
        path
    }
}

impl Renderable for InterfaceNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        compilation_unit(
            &self.usings,
            self.namespace.as_deref(),
            self.type_fragments(),
        )
    }
}

/// Builder for [`InterfaceNode`].
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    node: InterfaceNode,
}

impl InterfaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: InterfaceNode::new(name),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.node.visibility = vis;
        self
    }

    pub fn partial(mut self) -> Self {
        self.node.is_partial = true;
        self
    }

    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.node.type_parameters.push(name.into());
        self
    }

    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        let using = UsingDirective::new(namespace);
        merge_usings(&mut self.node.usings, [&using]);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.node.namespace = Some(namespace.into());
        self
    }

    pub fn attribute(mut self, attr: AttributeNode) -> Self {
        self.node.attributes.push(attr);
        self
    }

    pub fn extends(mut self, ty: impl Into<TypeRef>) -> Self {
        self.node.extends.push(ty.into());
        self
    }

    pub fn property(mut self, property: PropertyNode) -> Self {
        self.node.properties.push(property);
        self
    }

    pub fn method(mut self, method: MethodNode) -> Self {
        self.node.methods.push(method);
        self
    }

    pub fn build(self) -> Result<InterfaceNode> {
        let node = self.node;
        validate_identifier(&node.name, "interface")?;
        for param in &node.type_parameters {
            validate_identifier(param, "type parameter")?;
        }
        if let Some(ns) = &node.namespace {
            validate_qualified(ns, "namespace")?;
        }
        for ty in &node.extends {
            validate_qualified(&ty.name, "base interface")?;
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{MethodBuilder, ParamNode, PropertyBuilder};

    #[test]
    fn test_marker_interface_collapses() {
        let iface = InterfaceBuilder::new("IAggregateRoot").build().unwrap();
        assert_eq!(iface.render(), vec!["public interface IAggregateRoot { }"]);
    }

    #[test]
    fn test_interface_members() {
        let iface = InterfaceBuilder::new("ICustomerRepository")
            .using("System")
            .namespace("Shop.Core")
            .extends("IRepository")
            .property(
                PropertyBuilder::new("Count", TypeRef::int())
                    .get_only()
                    .build()
                    .unwrap(),
            )
            .method(
                MethodBuilder::new("FindAsync")
                    .returns(TypeRef::task(TypeRef::named("Customer").nullable()))
                    .param(ParamNode::new("id", TypeRef::guid()))
                    .build()
                    .unwrap(),
            )
            .method(
                MethodBuilder::new("Add")
                    .param(ParamNode::new("customer", "Customer"))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(
            iface.render(),
            vec![
                "using System;",
                "",
                "namespace Shop.Core",
                "{",
                "    public interface ICustomerRepository : IRepository",
                "    {",
                "        int Count { get; }",
                "",
                "        Task<Customer?> FindAsync(Guid id);",
                "        void Add(Customer customer);",
                "    }",
                "}",
            ]
        );
    }

    #[test]
    fn test_generic_interface_declaration() {
        let iface = InterfaceBuilder::new("IHandler")
            .type_parameter("TRequest")
            .partial()
            .build()
            .unwrap();
        assert_eq!(
            iface.declaration(),
            "public partial interface IHandler<TRequest>"
        );
    }
}
