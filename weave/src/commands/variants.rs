use clap::Args;
use eyre::Result;
use weave_core::Inflector;

#[derive(Args)]
pub struct VariantsCommand {
    /// Identifier in any case style, e.g. `customer_address`
    pub identifier: String,
}

impl VariantsCommand {
    pub fn run(&self) -> Result<()> {
        let inflector = Inflector::new();
        let variants = inflector.variants(&self.identifier);

        let width = variants
            .named()
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, value) in variants.named() {
            println!("{:<width$}  {}", name, value, width = width);
        }

        Ok(())
    }
}
