//! Properties.

use super::{AttributeNode, TypeRef, Visibility, validate_identifier};
use crate::{
    Result,
    builder::{CodeFragment, Renderable},
};

/// Accessor shape of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accessors {
    /// `{ get; }`
    GetOnly,
    /// `{ get; private set; }`
    GetPrivateSet,
    /// `{ get; set; }`
    #[default]
    GetSet,
    /// `{ get; init; }`
    GetInit,
}

impl Accessors {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetOnly => "{ get; }",
            Self::GetPrivateSet => "{ get; private set; }",
            Self::GetSet => "{ get; set; }",
            Self::GetInit => "{ get; init; }",
        }
    }
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    pub name: String,
    pub ty: TypeRef,
    pub visibility: Visibility,
    pub accessors: Accessors,
    pub is_static: bool,
    pub is_required: bool,
    pub initializer: Option<String>,
    pub attributes: Vec<AttributeNode>,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Public,
            accessors: Accessors::default(),
            is_static: false,
            is_required: false,
            initializer: None,
            attributes: Vec::new(),
        }
    }

    /// `Type Name { get; }` as declared inside an interface.
    pub fn signature(&self) -> String {
        format!("{} {} {}", self.ty, self.name, self.accessors.as_str())
    }

    /// The full declaration line of a class property.
    pub fn line(&self) -> String {
        let mut line = String::from(self.visibility.as_str());
        if self.is_static {
            line.push_str(" static");
        }
        if self.is_required {
            line.push_str(" required");
        }
        line.push(' ');
        line.push_str(&self.signature());
        if let Some(init) = &self.initializer {
            line.push_str(" = ");
            line.push_str(init);
            line.push(';');
        }
        line
    }
}

impl Renderable for PropertyNode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self
            .attributes
            .iter()
            .map(|a| CodeFragment::Line(a.to_string()))
            .collect();
        fragments.push(CodeFragment::Line(self.line()));
        fragments
    }
}

/// Builder for [`PropertyNode`].
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    node: PropertyNode,
}

impl PropertyBuilder {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            node: PropertyNode::new(name, ty),
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.node.visibility = vis;
        self
    }

    pub fn accessors(mut self, accessors: Accessors) -> Self {
        self.node.accessors = accessors;
        self
    }

    pub fn get_only(self) -> Self {
        self.accessors(Accessors::GetOnly)
    }

    pub fn private_set(self) -> Self {
        self.accessors(Accessors::GetPrivateSet)
    }

    pub fn init(self) -> Self {
        self.accessors(Accessors::GetInit)
    }

    pub fn static_(mut self) -> Self {
        self.node.is_static = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.node.is_required = true;
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.node.initializer = Some(value.into());
        self
    }

    pub fn attribute(mut self, attr: AttributeNode) -> Self {
        self.node.attributes.push(attr);
        self
    }

    pub fn build(self) -> Result<PropertyNode> {
        validate_identifier(&self.node.name, "property")?;
        Ok(self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_shapes() {
        let get_set = PropertyBuilder::new("Name", TypeRef::string()).build().unwrap();
        assert_eq!(get_set.line(), "public string Name { get; set; }");

        let get_only = PropertyBuilder::new("Id", TypeRef::guid())
            .get_only()
            .build()
            .unwrap();
        assert_eq!(get_only.line(), "public Guid Id { get; }");

        let private_set = PropertyBuilder::new("Total", TypeRef::int())
            .private_set()
            .build()
            .unwrap();
        assert_eq!(private_set.line(), "public int Total { get; private set; }");
    }

    #[test]
    fn test_initializer_and_modifiers() {
        let prop = PropertyBuilder::new("Errors", TypeRef::list(TypeRef::string()))
            .required()
            .initializer("new()")
            .build()
            .unwrap();
        assert_eq!(
            prop.line(),
            "public required List<string> Errors { get; set; } = new();"
        );
    }

    #[test]
    fn test_attributes_render_above() {
        let prop = PropertyBuilder::new("Email", TypeRef::string())
            .attribute(AttributeNode::new("Required"))
            .build()
            .unwrap();
        assert_eq!(
            prop.render(),
            vec!["[Required]", "public string Email { get; set; }"]
        );
    }

    #[test]
    fn test_invalid_name() {
        assert!(PropertyBuilder::new("first name", TypeRef::string()).build().is_err());
        assert!(PropertyBuilder::new("1st", TypeRef::string()).build().is_err());
    }
}
