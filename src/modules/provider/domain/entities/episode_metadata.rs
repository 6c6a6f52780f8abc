use crate::modules::provider::domain::value_objects::EpisodeNumber;
use serde::{Deserialize, Serialize};

/// Per-episode overlay data from the metadata mapping service, keyed by number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeMetadataEntry {
    pub number: EpisodeNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Runtime in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
}

impl EpisodeMetadataEntry {
    pub fn new(number: EpisodeNumber) -> Self {
        Self {
            number,
            title: None,
            air_date: None,
            image: None,
            overview: None,
            runtime: None,
        }
    }
}
