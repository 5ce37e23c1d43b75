use anyhow::{Context, Result};
use freezerinv_core::{config::GeneratorConfig, generator::InventoryGenerator, writer};

/// Written into the working directory, overwriting any previous run.
const OUTPUT_PATH: &str = "inventory.json";

fn main() -> Result<()> {
    let generator = InventoryGenerator::new(GeneratorConfig::default())
        .context("Default generator configuration is invalid")?;

    let mut rng = rand::thread_rng();
    let inventory = generator.generate(&mut rng);

    writer::write_inventory(&inventory, OUTPUT_PATH)
        .with_context(|| format!("Failed to write {OUTPUT_PATH}"))?;

    println!("Generated {OUTPUT_PATH} with random data!");
    Ok(())
}
