//! API controllers assembled from endpoint recipes.

use weave_core::Variants;

use super::EndpointRecipe;
use crate::{
    Result,
    syntax::{AttributeNode, ClassBuilder, ClassNode},
};

/// Namespace holding a resource's request containers.
pub fn features_namespace(namespace: &str, resource: &Variants) -> String {
    format!("{}.Features.{}", namespace, resource.pascal_plural)
}

/// Namespace holding the controllers.
pub fn controllers_namespace(namespace: &str) -> String {
    format!("{}.Controllers", namespace)
}

/// `{Plural}Controller` exposing one action per recipe, in the given order.
pub fn controller(
    namespace: &str,
    resource: &Variants,
    recipes: &[EndpointRecipe],
) -> Result<ClassNode> {
    let methods = recipes
        .iter()
        .map(|recipe| recipe.method(resource))
        .collect::<Result<Vec<_>>>()?;

    ClassBuilder::new(format!("{}Controller", resource.pascal_plural))
        .usings([
            "System.Net",
            "System.Threading",
            "System.Threading.Tasks",
            "MediatR",
            "Microsoft.AspNetCore.Mvc",
        ])
        .using(features_namespace(namespace, resource))
        .namespace(controllers_namespace(namespace))
        .attribute(AttributeNode::new("ApiController"))
        .attribute(AttributeNode::new("Route").string_arg("api/[controller]"))
        .base("ControllerBase")
        .inject("IMediator")
        .methods(methods)
        .build()
}

#[cfg(test)]
mod tests {
    use weave_core::variants;

    use super::*;
    use crate::builder::Renderable;

    #[test]
    fn test_controller_shell() {
        let class = controller("Shop", &variants("Customer"), &[EndpointRecipe::GetById]).unwrap();
        let lines = class.render();

        assert_eq!(class.name, "CustomersController");
        assert_eq!(lines[5], "using Shop.Features.Customers;");
        assert_eq!(lines[7], "namespace Shop.Controllers");
        assert_eq!(lines[9], "    [ApiController]");
        assert_eq!(lines[10], "    [Route(\"api/[controller]\")]");
        assert_eq!(
            lines[11],
            "    public class CustomersController : ControllerBase"
        );
        assert_eq!(
            lines[13],
            "        public CustomersController(IMediator mediator) => _mediator = mediator;"
        );
        assert_eq!(lines[15], "        private readonly IMediator _mediator;");
    }

    #[test]
    fn test_controller_without_recipes_keeps_constructor() {
        let class = controller("Shop", &variants("Order"), &[]).unwrap();
        assert!(class.methods.is_empty());
        assert_eq!(class.constructors.len(), 1);
    }
}
