//! Generation logic for the synthetic freezer inventory fixture.
//!
//! `config` holds every tunable as an explicit value, `generator` builds the
//! in-memory tree from an injected random source, and `writer` serializes a
//! finished tree to a pretty-printed JSON document.

pub mod config;
pub mod error;
pub mod generator;
pub mod writer;
