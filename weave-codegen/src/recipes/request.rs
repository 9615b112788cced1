//! Request/response/handler containers behind each endpoint.

use weave_core::{CSHARP_NAMING, Variants};

use super::{EndpointRecipe, features_namespace};
use crate::{
    Result,
    builder::CodeFragment,
    syntax::{
        ClassBuilder, ClassNode, MethodBuilder, ParamNode, PropertyBuilder, PropertyNode, TypeRef,
    },
};

fn dto(resource: &Variants) -> TypeRef {
    TypeRef::named(format!("{}Dto", resource.pascal))
}

fn property(name: impl AsRef<str>, ty: impl Into<TypeRef>) -> Result<PropertyNode> {
    PropertyBuilder::new(CSHARP_NAMING.member_name(name.as_ref()), ty).build()
}

fn request_properties(recipe: EndpointRecipe, resource: &Variants) -> Result<Vec<PropertyNode>> {
    match recipe {
        EndpointRecipe::Get => Ok(Vec::new()),
        EndpointRecipe::GetById | EndpointRecipe::Delete => Ok(vec![property(
            format!("{}Id", resource.pascal),
            TypeRef::guid(),
        )?]),
        EndpointRecipe::Create | EndpointRecipe::Update => {
            Ok(vec![property(resource.pascal.as_str(), dto(resource))?])
        }
        EndpointRecipe::Page => Ok(vec![
            property("PageSize", TypeRef::int())?,
            property("Index", TypeRef::int())?,
        ]),
    }
}

fn response_properties(recipe: EndpointRecipe, resource: &Variants) -> Result<Vec<PropertyNode>> {
    let list = || {
        PropertyBuilder::new(resource.pascal_plural.as_str(), TypeRef::list(dto(resource)))
            .initializer("new()")
            .build()
    };
    match recipe {
        EndpointRecipe::Get => Ok(vec![list()?]),
        EndpointRecipe::GetById => Ok(vec![property(
            resource.pascal.as_str(),
            dto(resource).nullable(),
        )?]),
        EndpointRecipe::Create => Ok(vec![property(
            format!("{}Id", resource.pascal),
            TypeRef::guid(),
        )?]),
        EndpointRecipe::Update | EndpointRecipe::Delete => Ok(Vec::new()),
        EndpointRecipe::Page => Ok(vec![property("Length", TypeRef::int())?, list()?]),
    }
}

fn with_properties(mut builder: ClassBuilder, properties: Vec<PropertyNode>) -> ClassBuilder {
    for p in properties {
        builder = builder.property(p);
    }
    builder
}

/// The container class behind `recipe`, e.g. `GetCustomerById` with nested
/// `Request`, `Response` and `Handler` types.
pub fn request_shell(
    namespace: &str,
    resource: &Variants,
    recipe: EndpointRecipe,
) -> Result<ClassNode> {
    let name = recipe.request_name(resource);
    let response = TypeRef::named("Response");

    let request = with_properties(
        ClassBuilder::new("Request").implements(TypeRef::generic("IRequest", vec![response.clone()])),
        request_properties(recipe, resource)?,
    )
    .build()?;

    let response_class = with_properties(
        ClassBuilder::new("Response"),
        response_properties(recipe, resource)?,
    )
    .build()?;

    let handle = MethodBuilder::new("Handle")
        .async_()
        .returns(TypeRef::task(response.clone()))
        .param(ParamNode::new("request", "Request"))
        .param(ParamNode::new("cancellationToken", "CancellationToken"))
        .body_line(format!(
            "_logger.LogInformation(\"Handling {{Request}}\", nameof({}));",
            name
        ))
        .body_line("await Task.CompletedTask;")
        .body_fragment(CodeFragment::Blank)
        .body_line("return new Response();")
        .build()?;

    let handler = ClassBuilder::new("Handler")
        .implements(TypeRef::generic(
            "IRequestHandler",
            vec![TypeRef::named("Request"), response],
        ))
        .inject(TypeRef::generic("ILogger", vec![TypeRef::named("Handler")]))
        .method(handle)
        .build()?;

    let mut usings = vec![
        "System",
        "System.Threading",
        "System.Threading.Tasks",
        "MediatR",
        "Microsoft.Extensions.Logging",
    ];
    if matches!(recipe, EndpointRecipe::Get | EndpointRecipe::Page) {
        usings.insert(1, "System.Collections.Generic");
    }

    ClassBuilder::new(name)
        .usings(usings)
        .namespace(features_namespace(namespace, resource))
        .nested(request)
        .nested(response_class)
        .nested(handler)
        .build()
}
