//! Classes.

use std::path::{Path, PathBuf};

use super::{
    AttributeNode, ConstructorNode, Dependency, FieldNode, MethodNode, PropertyNode, TypeDecl,
    TypeRef, UsingDirective, Visibility,
    render::{base_list, compilation_unit, packed, spaced, type_fragments, type_parameters},
    types::merge_usings,
    validate_identifier, validate_qualified,
};
use crate::{
    Context, Result,
    builder::{CodeFragment, Renderable},
};

/// A class declaration and everything it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_partial: bool,
    pub type_parameters: Vec<String>,
    pub usings: Vec<UsingDirective>,
    /// Enclosing namespace. Ignored when nested; must match the
    /// [`NamespaceNode`](super::NamespaceNode) that declares the class.
    pub namespace: Option<String>,
    pub attributes: Vec<AttributeNode>,
    pub base: Option<TypeRef>,
    pub implements: Vec<TypeRef>,
    pub constructors: Vec<ConstructorNode>,
    pub fields: Vec<FieldNode>,
    pub properties: Vec<PropertyNode>,
    pub methods: Vec<MethodNode>,
    pub nested: Vec<TypeDecl>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_sealed: false,
            is_partial: false,
            type_parameters: Vec::new(),
            usings: Vec::new(),
            namespace: None,
            attributes: Vec::new(),
            base: None,
            implements: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// True when the class has no members of any kind.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
            && self.fields.is_empty()
            && self.properties.is_empty()
            && self.methods.is_empty()
            && self.nested.is_empty()
    }

    /// Modifiers, name, type parameters and base list.
    pub fn declaration(&self) -> String {
        let mut parts = vec![self.visibility.as_str()];
        if self.is_static {
            parts.push("static");
        }
        if self.is_abstract {
            parts.push("abstract");
        }
        if self.is_sealed {
            parts.push("sealed");
        }
        if self.is_partial {
            parts.push("partial");
        }
        format!(
            "{} class {}{}{}",
            parts.join(" "),
            self.name,
            type_parameters(&self.type_parameters),
            base_list(self.base.as_ref(), &self.implements)
        )
    }

    /// Own usings followed by those of nested types, deduplicated.
    pub fn all_usings(&self) -> Vec<UsingDirective> {
        let mut usings = self.usings.clone();
        for nested in &self.nested {
            merge_usings(&mut usings, &nested.all_usings());
        }
        usings
    }

    /// The type declaration without usings or namespace.
    pub fn type_fragments(&self) -> Vec<CodeFragment> {
        let sections = vec![
            spaced(&self.constructors, Renderable::to_fragments),
            packed(&self.fields, |f| vec![CodeFragment::Line(f.line())]),
            packed(&self.properties, Renderable::to_fragments),
            spaced(&self.methods, Renderable::to_fragments),
            spaced(&self.nested, TypeDecl::type_fragments),
        ];
        type_fragments(&self.attributes, self.declaration(), sections)
    }

    /// `Name.cs`
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

impl Renderable for ClassNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        compilation_unit(
            &self.all_usings(),
            self.namespace.as_deref(),
            self.type_fragments(),
        )
    }
}

/// Builder for [`ClassNode`].
///
/// ```
/// use weave_codegen::{builder::Renderable, syntax::ClassBuilder};
///
/// let class = ClassBuilder::new("Foo").build().unwrap();
/// assert_eq!(class.render(), vec!["public class Foo { }"]);
/// ```
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    node: ClassNode,
    injected: Vec<Dependency>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: ClassNode::new(name),
            injected: Vec::new(),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.node.visibility = vis;
        self
    }

    pub fn static_(mut self) -> Self {
        self.node.is_static = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.node.is_abstract = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.node.is_sealed = true;
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

    pub fn usings(mut self, namespaces: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for ns in namespaces {
            self = self.using(ns);
        }
        self
    }

    pub fn using_directive(mut self, using: UsingDirective) -> Self {
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

    pub fn base(mut self, ty: impl Into<TypeRef>) -> Self {
        self.node.base = Some(ty.into());
        self
    }

    pub fn implements(mut self, ty: impl Into<TypeRef>) -> Self {
        self.node.implements.push(ty.into());
        self
    }

    pub fn constructor(mut self, ctor: ConstructorNode) -> Self {
        self.node.constructors.push(ctor);
        self
    }

    /// Inject a dependency named after its type.
    ///
    /// All injected dependencies share one generated constructor, placed
    /// first, with a private readonly backing field each.
    pub fn inject(mut self, ty: impl Into<TypeRef>) -> Self {
        self.injected.push(Dependency::inferred(ty));
        self
    }

    /// Inject a dependency with an explicit parameter name.
    pub fn inject_named(mut self, ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        self.injected.push(Dependency::new(ty, name));
        self
    }

    pub fn field(mut self, field: FieldNode) -> Self {
        self.node.fields.push(field);
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

    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodNode>) -> Self {
        self.node.methods.extend(methods);
        self
    }

    pub fn nested(mut self, decl: impl Into<TypeDecl>) -> Self {
        self.node.nested.push(decl.into());
        self
    }

    pub fn build(self) -> Result<ClassNode> {
        let Self { mut node, injected } = self;

        validate_identifier(&node.name, "class")?;
        for param in &node.type_parameters {
            validate_identifier(param, "type parameter")?;
        }
        if let Some(ns) = &node.namespace {
            validate_qualified(ns, "namespace")?;
        }
        for ty in node.base.iter().chain(&node.implements) {
            validate_qualified(&ty.name, "base type")?;
        }
        for dep in &injected {
            validate_identifier(&dep.name, "constructor parameter")?;
        }

        if !injected.is_empty() {
            let mut fields: Vec<_> = injected.iter().map(Dependency::field).collect();
            fields.append(&mut node.fields);
            node.fields = fields;
            let mut ctor = ConstructorNode::new(node.name.clone());
            ctor.dependencies = injected;
            node.constructors.insert(0, ctor);
        }

        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{MethodBuilder, PropertyBuilder};

    #[test]
    fn test_empty_class_collapses() {
        let class = ClassBuilder::new("Foo").build().unwrap();
        assert_eq!(class.render(), vec!["public class Foo { }"]);
    }

    #[test]
    fn test_empty_class_keeps_usings_namespace_and_attributes() {
        let class = ClassBuilder::new("Marker")
            .using("System")
            .namespace("Shop.Core")
            .attribute(AttributeNode::new("Serializable"))
            .sealed()
            .build()
            .unwrap();
        assert_eq!(
            class.render(),
            vec![
                "using System;",
                "",
                "namespace Shop.Core",
                "{",
                "    [Serializable]",
                "    public sealed class Marker { }",
                "}",
            ]
        );
    }

    #[test]
    fn test_section_order_and_spacing() {
        let class = ClassBuilder::new("Order")
            .method(MethodBuilder::new("Close").build().unwrap())
            .property(PropertyBuilder::new("Id", TypeRef::guid()).build().unwrap())
            .property(PropertyBuilder::new("Total", "decimal").private_set().build().unwrap())
            .field(FieldNode::new("_lines", TypeRef::list(TypeRef::named("Line"))))
            .method(MethodBuilder::new("Open").build().unwrap())
            .inject("IClock")
            .build()
            .unwrap();

        assert_eq!(
            class.render(),
            vec![
                "public class Order",
                "{",
                "    public Order(IClock clock) => _clock = clock;",
                "",
                "    private readonly IClock _clock;",
                "    private List<Line> _lines;",
                "",
                "    public Guid Id { get; set; }",
                "    public decimal Total { get; private set; }",
                "",
                "    public void Close() { }",
                "",
                "    public void Open() { }",
                "}",
            ]
        );
    }

    #[test]
    fn test_nested_types_hoist_usings() {
        let inner = ClassBuilder::new("Handler")
            .using("MediatR")
            .using("System")
            .build()
            .unwrap();
        let outer = ClassBuilder::new("Ping")
            .static_()
            .using("System")
            .nested(inner)
            .nested(ClassBuilder::new("Request").build().unwrap())
            .build()
            .unwrap();

        assert_eq!(
            outer.render(),
            vec![
                "using System;",
                "using MediatR;",
                "",
                "public static class Ping",
                "{",
                "    public class Handler { }",
                "",
                "    public class Request { }",
                "}",
            ]
        );
    }

    #[test]
    fn test_generic_declaration() {
        let class = ClassBuilder::new("Repository")
            .abstract_()
            .type_parameter("TEntity")
            .base("RepositoryBase")
            .implements(TypeRef::generic("IRepository", vec![TypeRef::named("TEntity")]))
            .build()
            .unwrap();
        assert_eq!(
            class.declaration(),
            "public abstract class Repository<TEntity> : RepositoryBase, IRepository<TEntity>"
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(ClassBuilder::new("1Foo").build().is_err());
        assert!(ClassBuilder::new("Foo").namespace("Shop..Core").build().is_err());
        assert!(ClassBuilder::new("@class").build().is_ok());
    }

    #[test]
    fn test_emit_writes_into_context() {
        let mut context = Context::new();
        let class = ClassBuilder::new("Foo").build().unwrap();
        let path = class.emit(Path::new("src/Shop"), &mut context);
        assert_eq!(path, Path::new("src/Shop/Foo.cs"));
        assert_eq!(
            context.get(&path),
            Some(&["public class Foo { }".to_string()][..])
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let class = ClassBuilder::new("Customer")
            .namespace("Shop")
            .property(PropertyBuilder::new("Name", TypeRef::string()).build().unwrap())
            .inject("IMediator")
            .build()
            .unwrap();
        assert_eq!(class.render(), class.render());
    }
}
