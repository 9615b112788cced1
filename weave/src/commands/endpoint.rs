use clap::Args;
use eyre::{Context, Result};
use weave_codegen::{
    builder::Renderable,
    recipes::{EndpointRecipe, request_shell},
};
use weave_core::variants;

#[derive(Args)]
pub struct EndpointCommand {
    /// Resource name, e.g. `Customer`
    pub resource: String,

    /// One of get, get-by-id, create, update, delete, page
    pub recipe: EndpointRecipe,

    /// Also print the request container the action sends
    #[arg(long)]
    pub shell: bool,

    /// Root namespace used for the request container
    #[arg(long, default_value = "App")]
    pub namespace: String,
}

impl EndpointCommand {
    pub fn run(&self) -> Result<()> {
        let resource = variants(&self.resource);

        let method = self
            .recipe
            .method(&resource)
            .wrap_err_with(|| format!("Failed to build '{}' endpoint", self.recipe))?;
        for line in method.render() {
            println!("{}", line);
        }

        if self.shell {
            let shell = request_shell(&self.namespace, &resource, self.recipe)
                .wrap_err("Failed to build request container")?;
            println!();
            for line in shell.render() {
                println!("{}", line);
            }
        }

        Ok(())
    }
}
