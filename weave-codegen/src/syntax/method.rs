//! Methods.

use super::{
    AttributeNode, ParamNode, TypeRef, Visibility, types::param_list, validate_identifier,
};
use crate::{
    Result,
    builder::{CodeFragment, Renderable},
};

/// What follows a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// A braced block; empty collapses to `{ }`.
    Block(Vec<CodeFragment>),
    /// `=> expression;`
    Expression(String),
    /// `;` for abstract and interface members.
    Declaration,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_async: bool,
    pub is_override: bool,
    pub is_virtual: bool,
    pub is_abstract: bool,
    pub return_type: TypeRef,
    pub params: Vec<ParamNode>,
    pub attributes: Vec<AttributeNode>,
    pub body: MethodBody,
}

impl MethodNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_async: false,
            is_override: false,
            is_virtual: false,
            is_abstract: false,
            return_type: TypeRef::void(),
            params: Vec::new(),
            attributes: Vec::new(),
            body: MethodBody::Block(Vec::new()),
        }
    }

    /// `ReturnType Name(params)` without modifiers.
    pub fn signature(&self) -> String {
        format!(
            "{} {}({})",
            self.return_type,
            self.name,
            param_list(&self.params)
        )
    }

    /// Modifiers followed by the signature.
    pub fn declaration(&self) -> String {
        let mut parts = vec![self.visibility.as_str()];
        if self.is_static {
            parts.push("static");
        }
        if self.is_abstract {
            parts.push("abstract");
        }
        if self.is_virtual {
            parts.push("virtual");
        }
        if self.is_override {
            parts.push("override");
        }
        if self.is_async {
            parts.push("async");
        }
        format!("{} {}", parts.join(" "), self.signature())
    }

    fn attribute_fragments(&self) -> Vec<CodeFragment> {
        self.attributes
            .iter()
            .map(|a| CodeFragment::Line(a.to_string()))
            .collect()
    }

    /// Fragments of the method as an interface member.
    pub fn interface_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.attribute_fragments();
        fragments.push(CodeFragment::Line(format!("{};", self.signature())));
        fragments
    }
}

impl Renderable for MethodNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.attribute_fragments();
        let declaration = self.declaration();
        match &self.body {
            MethodBody::Block(body) if body.is_empty() => {
                fragments.push(CodeFragment::Line(format!("{} {{ }}", declaration)));
            }
            MethodBody::Block(body) => {
                fragments.push(CodeFragment::braced(declaration, body.clone()));
            }
            MethodBody::Expression(expr) => {
                fragments.push(CodeFragment::Line(format!("{} => {};", declaration, expr)));
            }
            MethodBody::Declaration => {
                fragments.push(CodeFragment::Line(format!("{};", declaration)));
            }
        }
        fragments
    }
}

/// Builder for [`MethodNode`].
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    node: MethodNode,
}

impl MethodBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: MethodNode::new(name),
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

    pub fn async_(mut self) -> Self {
        self.node.is_async = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.node.is_override = true;
        self
    }

    pub fn virtual_(mut self) -> Self {
        self.node.is_virtual = true;
        self
    }

    /// Mark abstract; the body becomes a bare declaration.
    pub fn abstract_(mut self) -> Self {
        self.node.is_abstract = true;
        self.node.body = MethodBody::Declaration;
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.node.return_type = ty.into();
        self
    }

    pub fn param(mut self, param: ParamNode) -> Self {
        self.node.params.push(param);
        self
    }

    pub fn attribute(mut self, attr: AttributeNode) -> Self {
        self.node.attributes.push(attr);
        self
    }

    pub fn attributes(mut self, attrs: impl IntoIterator<Item = AttributeNode>) -> Self {
        self.node.attributes.extend(attrs);
        self
    }

    /// Append a statement line to a block body.
    pub fn body_line(self, line: impl Into<String>) -> Self {
        self.body_fragment(CodeFragment::Line(line.into()))
    }

    /// Append a blank line to a block body.
    pub fn body_blank(self) -> Self {
        self.body_fragment(CodeFragment::Blank)
    }

    /// Append a fragment (e.g. a nested braced block) to a block body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        match &mut self.node.body {
            MethodBody::Block(body) => body.push(fragment),
            other => *other = MethodBody::Block(vec![fragment]),
        }
        self
    }

    /// Use an expression body: `=> expr;`.
    pub fn expression(mut self, expr: impl Into<String>) -> Self {
        self.node.body = MethodBody::Expression(expr.into());
        self
    }

    pub fn build(self) -> Result<MethodNode> {
        validate_identifier(&self.node.name, "method")?;
        for param in &self.node.params {
            validate_identifier(&param.name, "parameter")?;
        }
        Ok(self.node)
    }
}
