use crate::error::FreezerInvError;
use freezerinv_schemas::Inventory;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-prints the inventory with 2-space indentation. Deterministic for
/// a fixed tree: struct field order fixes the key order.
pub fn to_json_pretty(inventory: &Inventory) -> Result<String, FreezerInvError> {
    Ok(serde_json::to_string_pretty(inventory)?)
}

/// Writes the serialized inventory to `path`, silently truncating any
/// existing file. No partial-output cleanup on failure.
pub fn write_inventory<P: AsRef<Path>>(
    inventory: &Inventory,
    path: P,
) -> Result<(), FreezerInvError> {
    let path = path.as_ref();
    let json = to_json_pretty(inventory)?;
    let mut file = File::create(path)
        .map_err(|e| FreezerInvError::FileIO(path.display().to_string(), e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| FreezerInvError::FileIO(path.display().to_string(), e))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::GeneratorConfig, generator::InventoryGenerator};
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_tree() -> Inventory {
        let generator = InventoryGenerator::new(GeneratorConfig::default()).unwrap();
        generator.generate(&mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn serialization_of_a_fixed_tree_is_byte_identical() {
        let inventory = fixed_tree();
        let first = to_json_pretty(&inventory).unwrap();
        let second = to_json_pretty(&inventory).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_uses_two_space_indentation() {
        let json = to_json_pretty(&fixed_tree()).unwrap();
        assert!(json.starts_with("{\n  \"rooms\": ["));
    }

    #[test]
    fn written_file_round_trips_to_an_equal_tree() {
        let inventory = fixed_tree();
        // Unique per process so parallel test runs do not race on one file.
        let path = std::env::temp_dir().join(format!(
            "freezerinv_writer_test_{}.json",
            std::process::id()
        ));

        write_inventory(&inventory, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let back: Inventory = serde_json::from_str(&content).unwrap();
        assert_eq!(back, inventory);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_surfaces_as_file_io_error() {
        let err = write_inventory(&fixed_tree(), "/nonexistent-dir/inventory.json").unwrap_err();
        assert!(matches!(err, FreezerInvError::FileIO(_, _)));
    }
}
