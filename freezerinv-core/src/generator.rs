use crate::{config::GeneratorConfig, error::FreezerInvError};
use freezerinv_schemas::{
    BoxMetadata, Freezer, FreezerMetadata, Inventory, Room, RoomMetadata, Sample, SampleMetadata,
    SampleType, Shelf, ShelfMetadata, StorageBox,
};
use rand::Rng;

/// Builds the full inventory tree from a validated configuration.
///
/// The random source is injected per call, so a seeded `StdRng` reproduces
/// the same tree while the shipped binary can use a fresh OS-seeded rng.
#[derive(Debug)]
pub struct InventoryGenerator {
    config: GeneratorConfig,
}

impl InventoryGenerator {
    /// Validates the configuration and returns a ready generator.
    ///
    /// # Errors
    ///
    /// Returns `FreezerInvError::ConfigError` for an empty vocabulary table,
    /// an inverted count range, or per-room tables shorter than the room
    /// count. A generator that passes validation cannot fail to generate.
    pub fn new(config: GeneratorConfig) -> Result<Self, FreezerInvError> {
        let tables: [(&str, &[String]); 6] = [
            ("freezer_models", &config.freezer_models),
            ("serial_prefixes", &config.serial_prefixes),
            ("temperatures", &config.temperatures),
            ("box_types", &config.box_types),
            ("species", &config.species),
            ("collectors", &config.collectors),
        ];
        for (name, table) in tables {
            if table.is_empty() {
                return Err(FreezerInvError::ConfigError(format!(
                    "vocabulary table '{name}' is empty"
                )));
            }
        }

        let per_room: [(&str, usize); 3] = [
            ("room_names", config.room_names.len()),
            ("buildings", config.buildings.len()),
            ("floors", config.floors.len()),
        ];
        for (name, len) in per_room {
            if len < config.room_count as usize {
                return Err(FreezerInvError::ConfigError(format!(
                    "table '{name}' has {len} entries for {} rooms",
                    config.room_count
                )));
            }
        }

        let ranges = [
            ("freezer_range", config.freezer_range),
            ("box_range", config.box_range),
            ("sample_range", config.sample_range),
        ];
        for (name, (lo, hi)) in ranges {
            if lo > hi {
                return Err(FreezerInvError::ConfigError(format!(
                    "range '{name}' is inverted ({lo} > {hi})"
                )));
            }
        }

        Ok(Self { config })
    }

    /// Builds the tree top-down in a single pass. The result is fully
    /// materialized and never mutated afterwards; serialization is a
    /// separate step (see `writer`).
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Inventory {
        let rooms = (1..=self.config.room_count)
            .map(|r| self.build_room(rng, r))
            .collect();
        Inventory { rooms }
    }

    fn build_room<R: Rng>(&self, rng: &mut R, r: u32) -> Room {
        let cfg = &self.config;
        let idx = (r - 1) as usize;
        let num_freezers = rng.gen_range(cfg.freezer_range.0..=cfg.freezer_range.1);
        let freezers = (1..=num_freezers)
            .map(|f| self.build_freezer(rng, r, f))
            .collect();
        Room {
            id: format!("room{r}"),
            name: cfg.room_names[idx].clone(),
            metadata: RoomMetadata {
                location: format!("Building {}, {}", cfg.buildings[idx], cfg.floors[idx]),
            },
            freezers,
        }
    }

    fn build_freezer<R: Rng>(&self, rng: &mut R, r: u32, f: u32) -> Freezer {
        let cfg = &self.config;
        let metadata = FreezerMetadata {
            model: pick(rng, &cfg.freezer_models).to_string(),
            serial: format!("{}{}{:02}", pick(rng, &cfg.serial_prefixes), r, f),
            temperature: pick(rng, &cfg.temperatures).to_string(),
        };
        let shelves = (1..=cfg.shelves_per_freezer)
            .map(|s| self.build_shelf(rng, r, f, s))
            .collect();
        Freezer {
            id: format!("freezer{r}-{f}"),
            name: format!("Freezer #{f}"),
            metadata,
            shelves,
        }
    }

    fn build_shelf<R: Rng>(&self, rng: &mut R, r: u32, f: u32, s: u32) -> Shelf {
        let cfg = &self.config;
        let num_boxes = rng.gen_range(cfg.box_range.0..=cfg.box_range.1);
        let boxes = (1..=num_boxes)
            .map(|b| self.build_box(rng, r, f, s, b))
            .collect();
        Shelf {
            id: format!("shelf{r}-{f}-{s}"),
            name: format!("Shelf {s}"),
            metadata: ShelfMetadata {
                capacity: cfg.shelf_capacity,
            },
            boxes,
        }
    }

    fn build_box<R: Rng>(&self, rng: &mut R, r: u32, f: u32, s: u32, b: u32) -> StorageBox {
        let cfg = &self.config;
        let metadata = BoxMetadata {
            box_type: pick(rng, &cfg.box_types).to_string(),
            label: box_label(prefix_letter(b), b, Some(s), Some(f)),
        };
        let num_samples = rng.gen_range(cfg.sample_range.0..=cfg.sample_range.1);
        let samples = (1..=num_samples)
            .map(|sm| self.build_sample(rng, r, f, s, b, sm))
            .collect();
        StorageBox {
            id: format!("box{r}-{f}-{s}-{b}"),
            name: format!("Box {b}"),
            metadata,
            samples,
        }
    }

    fn build_sample<R: Rng>(&self, rng: &mut R, r: u32, f: u32, s: u32, b: u32, sm: u32) -> Sample {
        let cfg = &self.config;
        let is_edna = rng.gen_bool(0.5);
        let (sample_type, name, species) = if is_edna {
            (
                SampleType::Edna,
                format!("Sample EDNA-{r}{f}{s}{b}{sm:03}"),
                None,
            )
        } else {
            (
                SampleType::WholeFish,
                format!("Fish-Body-{r}{f}{s}{b}{sm:03}"),
                Some(pick(rng, &cfg.species).to_string()),
            )
        };
        Sample {
            id: format!("sample{r}-{f}-{s}-{b}-{sm}"),
            sample_type,
            name,
            metadata: SampleMetadata {
                collected_by: pick(rng, &cfg.collectors).to_string(),
                date_collected: format!("2025-04-{:02}", rng.gen_range(1u32..=28)),
                species,
            },
        }
    }
}

/// Label prefix letter for a 1-indexed box position: 'A' through 'L',
/// wrapping every 12 boxes.
fn prefix_letter(b: u32) -> char {
    (b'A' + ((b - 1) % 12) as u8) as char
}

/// Formats a printed box label from the box position and, when known, the
/// shelf and freezer it sits on. The shelf-only and bare forms are kept for
/// parity with older label printers; `generate` always knows both positions
/// and only produces the first form.
pub fn box_label(prefix: char, n: u32, shelf: Option<u32>, freezer: Option<u32>) -> String {
    match (shelf, freezer) {
        (Some(shelf), Some(freezer)) => format!("{prefix}Box-F{freezer}S{shelf}-{n}"),
        (Some(shelf), None) => format!("{prefix}Box-S{shelf}-{n}"),
        _ => format!("{prefix}Box-{n}"),
    }
}

/// Uniform pick from a table validated non-empty in `InventoryGenerator::new`.
fn pick<'a, R: Rng>(rng: &mut R, table: &'a [String]) -> &'a str {
    &table[rng.gen_range(0..table.len())]
}
