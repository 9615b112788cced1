//! Type references, visibility, using directives and parameters.

use std::fmt;

use super::AttributeNode;

/// Access modifier of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::ProtectedInternal => "protected internal",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a type, e.g. `Task<ActionResult<GetCustomerById.Response>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Possibly qualified name (`GetCustomerById.Response`).
    pub name: String,
    /// Generic arguments.
    pub args: Vec<TypeRef>,
    /// Rendered with a trailing `?`.
    pub nullable: bool,
    /// Rendered with a trailing `[]`.
    pub array: bool,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            nullable: false,
            array: false,
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            args,
            ..Self::named(name)
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn void() -> Self {
        Self::named("void")
    }

    pub fn string() -> Self {
        Self::named("string")
    }

    pub fn int() -> Self {
        Self::named("int")
    }

    pub fn bool() -> Self {
        Self::named("bool")
    }

    pub fn guid() -> Self {
        Self::named("Guid")
    }

    /// `Task<inner>`
    pub fn task(inner: TypeRef) -> Self {
        Self::generic("Task", vec![inner])
    }

    /// `List<inner>`
    pub fn list(inner: TypeRef) -> Self {
        Self::generic("List", vec![inner])
    }

    pub fn is_void(&self) -> bool {
        self.name == "void" && self.args.is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        if self.array {
            f.write_str("[]")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// A `using` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    pub namespace: String,
    pub alias: Option<String>,
    pub is_static: bool,
}

impl UsingDirective {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            alias: None,
            is_static: false,
        }
    }

    /// `using static Namespace.Type;`
    pub fn static_(namespace: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::new(namespace)
        }
    }

    /// `using Alias = Namespace.Type;`
    pub fn alias(alias: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::new(namespace)
        }
    }
}

impl fmt::Display for UsingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.alias, self.is_static) {
            (Some(alias), _) => write!(f, "using {} = {};", alias, self.namespace),
            (None, true) => write!(f, "using static {};", self.namespace),
            (None, false) => write!(f, "using {};", self.namespace),
        }
    }
}

/// Append `incoming` to `usings`, skipping duplicates and keeping first-seen order.
pub(crate) fn merge_usings<'a>(
    usings: &mut Vec<UsingDirective>,
    incoming: impl IntoIterator<Item = &'a UsingDirective>,
) {
    for using in incoming {
        if !usings.contains(using) {
            usings.push(using.clone());
        }
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNode {
    pub name: String,
    pub ty: TypeRef,
    /// Inline attributes such as `[FromRoute]`.
    pub attributes: Vec<AttributeNode>,
    pub default: Option<String>,
}

impl ParamNode {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
            default: None,
        }
    }

    pub fn attribute(mut self, attr: AttributeNode) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl fmt::Display for ParamNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in &self.attributes {
            write!(f, "{} ", attr)?;
        }
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Render a parameter list without the surrounding parentheses.
pub(crate) fn param_list(params: &[ParamNode]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display() {
        assert_eq!(TypeRef::string().to_string(), "string");
        assert_eq!(TypeRef::guid().nullable().to_string(), "Guid?");
        assert_eq!(TypeRef::int().array().to_string(), "int[]");
        assert_eq!(
            TypeRef::task(TypeRef::generic(
                "ActionResult",
                vec![TypeRef::named("GetCustomerById.Response")]
            ))
            .to_string(),
            "Task<ActionResult<GetCustomerById.Response>>"
        );
        assert_eq!(
            TypeRef::generic(
                "IRequestHandler",
                vec![TypeRef::named("Request"), TypeRef::named("Response")]
            )
            .to_string(),
            "IRequestHandler<Request, Response>"
        );
    }

    #[test]
    fn test_using_display() {
        assert_eq!(UsingDirective::new("System").to_string(), "using System;");
        assert_eq!(
            UsingDirective::static_("System.Math").to_string(),
            "using static System.Math;"
        );
        assert_eq!(
            UsingDirective::alias("Json", "System.Text.Json").to_string(),
            "using Json = System.Text.Json;"
        );
    }

    #[test]
    fn test_merge_usings_dedups_in_order() {
        let mut usings = vec![UsingDirective::new("System")];
        let incoming = [
            UsingDirective::new("MediatR"),
            UsingDirective::new("System"),
            UsingDirective::new("FluentValidation"),
        ];
        merge_usings(&mut usings, &incoming);
        let names: Vec<_> = usings.iter().map(|u| u.namespace.as_str()).collect();
        assert_eq!(names, vec!["System", "MediatR", "FluentValidation"]);
    }

    #[test]
    fn test_param_display() {
        let param = ParamNode::new("request", "GetCustomerById.Request")
            .attribute(AttributeNode::new("FromRoute"));
        assert_eq!(param.to_string(), "[FromRoute] GetCustomerById.Request request");

        let param = ParamNode::new("cancellationToken", "CancellationToken")
            .default_value("default");
        assert_eq!(
            param.to_string(),
            "CancellationToken cancellationToken = default"
        );
    }
}
