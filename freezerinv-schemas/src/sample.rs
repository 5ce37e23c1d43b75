//! Leaf level of the inventory tree: individual samples and their metadata.

use serde::{Deserialize, Serialize};

/// The two kinds of sample the tracker knows about. The type determines the
/// sample's name format and whether species metadata is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    /// Environmental DNA collection; carries no species.
    #[serde(rename = "eDNA")]
    Edna,
    /// A physical specimen with an identified species.
    #[serde(rename = "Whole Fish")]
    WholeFish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub collected_by: String,
    /// Always rendered as `2025-04-{day:02}` with day in 1..=28.
    pub date_collected: String,
    /// Present iff the sample is a whole fish; omitted from JSON otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

/// Identifier pattern: `sample{r}-{f}-{s}-{b}-{sm}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    #[serde(rename = "type")]
    pub sample_type: SampleType,
    pub name: String,
    pub metadata: SampleMetadata,
}
