/// All tunables for one generation run: per-level counts, closed count
/// ranges, and the vocabulary tables random picks are drawn from.
///
/// An explicit immutable value rather than module-level constants, so tests
/// can inject tiny trees and pair the config with a seeded random source.
/// `Default` carries the shipped fixture parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub room_count: u32,
    /// Closed range of freezers per room.
    pub freezer_range: (u32, u32),
    pub shelves_per_freezer: u32,
    /// Closed range of boxes per shelf.
    pub box_range: (u32, u32),
    /// Closed range of samples per box.
    pub sample_range: (u32, u32),
    /// Nominal capacity recorded on every shelf.
    pub shelf_capacity: u32,

    /// Per-room tables, indexed by room position. Each must have at least
    /// `room_count` entries.
    pub room_names: Vec<String>,
    pub buildings: Vec<String>,
    pub floors: Vec<String>,

    /// Uniform-pick tables. Each must be non-empty.
    pub freezer_models: Vec<String>,
    pub serial_prefixes: Vec<String>,
    pub temperatures: Vec<String>,
    pub box_types: Vec<String>,
    pub species: Vec<String>,
    pub collectors: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_count: 3,
            freezer_range: (4, 7),
            shelves_per_freezer: 4,
            box_range: (1, 8),
            sample_range: (3, 12),
            shelf_capacity: 20,
            room_names: strings(&["Room 1", "Room 2", "Room 3"]),
            buildings: strings(&["A", "B", "C"]),
            floors: strings(&["1st Floor", "2nd Floor", "Basement"]),
            freezer_models: strings(&[
                "Thermo ULT1786",
                "Panasonic MDF",
                "Fisher FZ-100",
                "Sanyo MDF",
            ]),
            serial_prefixes: strings(&["T", "P", "F", "S"]),
            temperatures: strings(&["-60°C", "-70°C", "-80°C"]),
            box_types: strings(&["Cardboard", "Plastic"]),
            species: strings(&[
                "Salmo salar",
                "Oncorhynchus mykiss",
                "Esox lucius",
                "Gadus morhua",
                "Perca fluviatilis",
                "Cyprinus carpio",
                "Silurus glanis",
                "Lota lota",
            ]),
            collectors: strings(&[
                "Christoph Deeg",
                "Kristi Miller",
                "Carl Llewellyn",
                "Kyle Goff",
                "Art Bass",
                "Angela Schulze",
            ]),
        }
    }
}
