// Zoro `/anime/episodes/{id}` response shapes

use crate::modules::provider::domain::value_objects::EpisodeNumber;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoroEpisodesResponse {
    #[serde(default)]
    pub total_episodes: Option<u32>,
    #[serde(default)]
    pub episodes: Option<Vec<ZoroEpisode>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoroEpisode {
    pub episode_id: String,
    #[serde(default, deserialize_with = "EpisodeNumber::deserialize_lenient")]
    pub number: Option<EpisodeNumber>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_filler: Option<bool>,
}
