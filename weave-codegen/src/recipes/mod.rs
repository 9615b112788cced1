//! Canonical generated shapes for API resources.

mod controller;
mod endpoint;
mod request;

pub use controller::{controller, controllers_namespace, features_namespace};
pub use endpoint::{EndpointRecipe, ParseRecipeError};
pub use request::request_shell;
