//! Canonical controller action shapes.

use std::{fmt, str::FromStr};

use weave_core::Variants;

use crate::{
    Result,
    builder::CodeFragment,
    syntax::{AttributeNode, MethodBuilder, MethodNode, ParamNode, TypeRef},
};

/// One of the fixed controller action shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointRecipe {
    Get,
    GetById,
    Create,
    Update,
    Delete,
    Page,
}

impl EndpointRecipe {
    pub const ALL: [EndpointRecipe; 6] = [
        Self::Get,
        Self::GetById,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Page,
    ];

    /// Kebab-case name used on the command line and in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::GetById => "get-by-id",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Page => "page",
        }
    }

    /// Name of the action method.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::GetById => "GetById",
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Page => "Page",
        }
    }

    /// Name of the request/response container, e.g. `GetCustomerById`.
    pub fn request_name(&self, resource: &Variants) -> String {
        match self {
            Self::Get => format!("Get{}", resource.pascal_plural),
            Self::GetById => format!("Get{}ById", resource.pascal),
            Self::Create => format!("Create{}", resource.pascal),
            Self::Update => format!("Update{}", resource.pascal),
            Self::Delete => format!("Delete{}", resource.pascal),
            Self::Page => format!("Get{}Page", resource.pascal_plural),
        }
    }

    /// Name of the route, referenced by `CreatedAtRoute`.
    pub fn route_name(&self, resource: &Variants) -> String {
        format!("{}Route", self.request_name(resource))
    }

    /// Route template relative to the controller.
    pub fn route(&self, resource: &Variants) -> String {
        match self {
            Self::Get | Self::Create | Self::Update => String::new(),
            Self::GetById | Self::Delete => format!("{{{}Id}}", resource.camel),
            Self::Page => "page/{pageSize}/{index}".to_string(),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Get | Self::GetById | Self::Page => "HttpGet",
            Self::Create => "HttpPost",
            Self::Update => "HttpPut",
            Self::Delete => "HttpDelete",
        }
    }

    /// `(response type, status)` pairs, success first.
    fn responses(&self, response: &str) -> Vec<(Option<String>, &'static str)> {
        let ok = (Some(response.to_string()), "OK");
        let not_found = (Some("ProblemDetails".to_string()), "NotFound");
        let bad_request = (Some("ProblemDetails".to_string()), "BadRequest");
        let error = (Some("string".to_string()), "InternalServerError");
        let unauthorized = (Some("string".to_string()), "Unauthorized");

        match self {
            Self::Get | Self::Page => vec![ok, error, unauthorized],
            Self::GetById => vec![ok, not_found, error, unauthorized],
            Self::Create => vec![
                (Some(response.to_string()), "Created"),
                bad_request,
                error,
                unauthorized,
            ],
            Self::Update => vec![ok, not_found, bad_request, error],
            Self::Delete => vec![(None, "NoContent"), not_found, error, unauthorized],
        }
    }

    /// Where the request parameter binds from; `None` when the action
    /// builds the request itself.
    fn binding(&self) -> Option<&'static str> {
        match self {
            Self::Get => None,
            Self::GetById | Self::Delete | Self::Page => Some("FromRoute"),
            Self::Create | Self::Update => Some("FromBody"),
        }
    }

    fn body(&self, resource: &Variants, request: &str) -> Vec<CodeFragment> {
        let send = CodeFragment::line("var response = await _mediator.Send(request, cancellationToken);");
        match self {
            Self::Get => vec![
                CodeFragment::Line(format!("var request = new {}.Request();", request)),
                send,
                CodeFragment::Blank,
                CodeFragment::line("return Ok(response);"),
            ],
            Self::GetById => vec![
                send,
                CodeFragment::Blank,
                CodeFragment::braced(
                    format!("if (response.{} == null)", resource.pascal),
                    vec![CodeFragment::Line(format!(
                        "return new NotFoundObjectResult(request.{}Id);",
                        resource.pascal
                    ))],
                ),
                CodeFragment::Blank,
                CodeFragment::line("return response;"),
            ],
            Self::Create => vec![
                send,
                CodeFragment::Blank,
                CodeFragment::Line(format!(
                    "return CreatedAtRoute(\"{}\", new {{ {}Id = response.{}Id }}, response);",
                    EndpointRecipe::GetById.route_name(resource),
                    resource.camel,
                    resource.pascal
                )),
            ],
            Self::Update | Self::Page => vec![
                send,
                CodeFragment::Blank,
                CodeFragment::line("return Ok(response);"),
            ],
            Self::Delete => vec![
                CodeFragment::line("await _mediator.Send(request, cancellationToken);"),
                CodeFragment::Blank,
                CodeFragment::line("return NoContent();"),
            ],
        }
    }

    /// Build the action method for `resource`.
    pub fn method(&self, resource: &Variants) -> Result<MethodNode> {
        let request = self.request_name(resource);
        let response = format!("{}.Response", request);

        let mut builder = MethodBuilder::new(self.method_name())
            .async_()
            .attribute(
                AttributeNode::new("Route")
                    .string_arg(self.route(resource))
                    .named("Name", format!("\"{}\"", self.route_name(resource))),
            )
            .attribute(AttributeNode::new(self.verb()));

        for (ty, status) in self.responses(&response) {
            let mut attr = AttributeNode::new("ProducesResponseType");
            if let Some(ty) = ty {
                attr = attr.arg(format!("typeof({})", ty));
            }
            builder = builder.attribute(attr.arg(format!("(int)HttpStatusCode.{}", status)));
        }

        let result = match self {
            Self::Delete => TypeRef::named("ActionResult"),
            _ => TypeRef::generic("ActionResult", vec![TypeRef::named(response.as_str())]),
        };
        builder = builder.returns(TypeRef::task(result));

        if let Some(binding) = self.binding() {
            builder = builder.param(
                ParamNode::new("request", format!("{}.Request", request))
                    .attribute(AttributeNode::new(binding)),
            );
        }
        builder = builder.param(ParamNode::new("cancellationToken", "CancellationToken"));

        for fragment in self.body(resource, &request) {
            builder = builder.body_fragment(fragment);
        }
        builder.build()
    }
}

impl fmt::Display for EndpointRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown recipe name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown endpoint recipe '{0}', expected one of: get, get-by-id, create, update, delete, page")]
pub struct ParseRecipeError(String);

impl FromStr for EndpointRecipe {
    type Err = ParseRecipeError;

    /// Accepts the kebab-case name or the method name, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = weave_core::to_kebab_case(s);
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| ParseRecipeError(s.to_string()))
    }
}
