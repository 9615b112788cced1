//! Constructors and their shape selection.

use weave_core::CSHARP_NAMING;

use super::{FieldNode, TypeRef, Visibility, validate_identifier};
use crate::{
    Result,
    builder::{CodeFragment, Renderable},
};

/// A constructor-injected dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub ty: TypeRef,
    /// Parameter name; the backing field is `_` + name.
    pub name: String,
}

impl Dependency {
    pub fn new(ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Name the parameter after the type: `IMediator` -> `mediator`.
    pub fn inferred(ty: impl Into<TypeRef>) -> Self {
        let ty = ty.into();
        let name = CSHARP_NAMING.dependency_name(&ty.name);
        Self { ty, name }
    }

    pub fn field_name(&self) -> String {
        CSHARP_NAMING.field_name(&self.name)
    }

    /// The private readonly field backing this dependency.
    pub fn field(&self) -> FieldNode {
        FieldNode::readonly(self.field_name(), self.ty.clone())
    }

    fn assignment(&self) -> String {
        format!("{} = {};", self.field_name(), self.name)
    }
}

/// How a constructor is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorShape {
    /// No dependencies and nothing to do: `public Foo() { }`.
    Empty,
    /// Exactly one dependency and nothing else: `public Foo(T t) => _t = t;`.
    Expression,
    /// Everything else: one assignment per dependency, then the body.
    Block,
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorNode {
    pub type_name: String,
    pub visibility: Visibility,
    pub dependencies: Vec<Dependency>,
    /// Arguments of a `: base(...)` initializer.
    pub base_args: Option<Vec<String>>,
    pub body: Vec<String>,
}

impl ConstructorNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            visibility: Visibility::Public,
            dependencies: Vec::new(),
            base_args: None,
            body: Vec::new(),
        }
    }

    pub fn shape(&self) -> ConstructorShape {
        let bare = self.body.is_empty() && self.base_args.is_none();
        match self.dependencies.len() {
            0 if bare => ConstructorShape::Empty,
            1 if bare => ConstructorShape::Expression,
            _ => ConstructorShape::Block,
        }
    }

    fn signature(&self) -> String {
        let params = self
            .dependencies
            .iter()
            .map(|d| format!("{} {}", d.ty, d.name))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sig = format!("{} {}({})", self.visibility, self.type_name, params);
        if let Some(args) = &self.base_args {
            sig.push_str(&format!(" : base({})", args.join(", ")));
        }
        sig
    }
}

impl Renderable for ConstructorNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let signature = self.signature();
        match self.shape() {
            ConstructorShape::Empty => vec![CodeFragment::Line(format!("{} {{ }}", signature))],
            ConstructorShape::Expression => {
                let dep = &self.dependencies[0];
                vec![CodeFragment::Line(format!(
                    "{} => {}",
                    signature,
                    dep.assignment()
                ))]
            }
            ConstructorShape::Block => {
                let body = self
                    .dependencies
                    .iter()
                    .map(|d| CodeFragment::Line(d.assignment()))
                    .chain(self.body.iter().map(|l| CodeFragment::line(l.as_str())))
                    .collect();
                vec![CodeFragment::braced(signature, body)]
            }
        }
    }
}

/// Builder for [`ConstructorNode`].
#[derive(Debug, Clone)]
pub struct ConstructorBuilder {
    node: ConstructorNode,
}

impl ConstructorBuilder {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            node: ConstructorNode::new(type_name),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.node.visibility = vis;
        self
    }

    /// Inject a dependency with an explicit parameter name.
    pub fn dependency(mut self, ty: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        self.node.dependencies.push(Dependency::new(ty, name));
        self
    }

    /// Inject a dependency named after its type.
    pub fn inject(mut self, ty: impl Into<TypeRef>) -> Self {
        self.node.dependencies.push(Dependency::inferred(ty));
        self
    }

    pub fn base(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node.base_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.node.body.push(line.into());
        self
    }

    pub fn build(self) -> Result<ConstructorNode> {
        validate_identifier(&self.node.type_name, "constructor")?;
        for dep in &self.node.dependencies {
            validate_identifier(&dep.name, "constructor parameter")?;
        }
        Ok(self.node)
    }
}
