use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Root of the inventory tree. Holds the ordered list of rooms and nothing
/// else; the root itself has no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMetadata {
    /// Combined building and floor string, e.g. "Building A, 2nd Floor".
    pub location: String,
}

/// A physical room housing one or more freezers.
///
/// Identifier pattern: `room{r}` with `r` the 1-indexed room position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub metadata: RoomMetadata,
    pub freezers: Vec<Freezer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezerMetadata {
    pub model: String,
    /// Serial of the form `{prefix letter}{room}{freezer:02}`.
    pub serial: String,
    pub temperature: String,
}

/// Identifier pattern: `freezer{r}-{f}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freezer {
    pub id: String,
    pub name: String,
    pub metadata: FreezerMetadata,
    pub shelves: Vec<Shelf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfMetadata {
    pub capacity: u32,
}

/// Identifier pattern: `shelf{r}-{f}-{s}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    pub name: String,
    pub metadata: ShelfMetadata,
    pub boxes: Vec<StorageBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxMetadata {
    pub box_type: String,
    /// Printed label, e.g. "CBox-F2S1-3". See `freezerinv-core`'s
    /// `box_label` for the format.
    pub label: String,
}

/// A sample box sitting on a shelf. Named `StorageBox` to stay clear of
/// `std::boxed::Box`; serializes under the same `id`/`name`/`metadata`/
/// `samples` shape as every other level.
///
/// Identifier pattern: `box{r}-{f}-{s}-{b}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageBox {
    pub id: String,
    pub name: String,
    pub metadata: BoxMetadata,
    pub samples: Vec<Sample>,
}
