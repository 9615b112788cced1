//! Fields.

use super::{TypeRef, Visibility};

/// A field declaration, private by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub name: String,
    pub ty: TypeRef,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_readonly: bool,
    pub is_const: bool,
    pub initializer: Option<String>,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::Private,
            is_static: false,
            is_readonly: false,
            is_const: false,
            initializer: None,
        }
    }

    /// `private readonly T _name;`, the shape used for injected dependencies.
    pub fn readonly(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            is_readonly: true,
            ..Self::new(name, ty)
        }
    }

    /// `public const T NAME = value;`
    pub fn constant(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            visibility: Visibility::Public,
            is_const: true,
            initializer: Some(value.into()),
            ..Self::new(name, ty)
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    /// The declaration line.
    pub fn line(&self) -> String {
        let mut parts = vec![self.visibility.as_str()];
        if self.is_const {
            parts.push("const");
        } else {
            if self.is_static {
                parts.push("static");
            }
            if self.is_readonly {
                parts.push("readonly");
            }
        }
        let mut line = format!("{} {} {}", parts.join(" "), self.ty, self.name);
        if let Some(init) = &self.initializer {
            line.push_str(" = ");
            line.push_str(init);
        }
        line.push(';');
        line
    }
}
