mod endpoint;
mod generate;
mod variants;

use clap::{Parser, Subcommand};
use endpoint::EndpointCommand;
use eyre::Result;
use generate::GenerateCommand;
use variants::VariantsCommand;

#[derive(Parser)]
#[command(name = "weave")]
#[command(version)]
#[command(about = "Scaffold C# microservice solutions from a TOML manifest")]
pub(crate) struct Cli {
    /// Log generation steps (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Variants(cmd) => cmd.run(),
            Commands::Endpoint(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a solution from weave.toml
    Generate(GenerateCommand),

    /// Show the case and plural variants of an identifier
    Variants(VariantsCommand),

    /// Print one controller action for a resource
    Endpoint(EndpointCommand),
}
