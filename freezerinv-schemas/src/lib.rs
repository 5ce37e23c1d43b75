//! Data model for the synthetic freezer inventory tree.
//!
//! The inventory is a strict five-level rooted tree: rooms contain freezers,
//! freezers contain shelves, shelves contain boxes, and boxes contain
//! samples. Every level carries an `id` encoding its full positional path,
//! a display `name`, and a small typed `metadata` block. Struct field order
//! fixes the key order of the serialized JSON document.

pub mod inventory;
pub mod sample;

pub use inventory::{
    BoxMetadata, Freezer, FreezerMetadata, Inventory, Room, RoomMetadata, Shelf, ShelfMetadata,
    StorageBox,
};
pub use sample::{Sample, SampleMetadata, SampleType};
