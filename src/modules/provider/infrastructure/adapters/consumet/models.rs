// Consumet API response shapes
// Only the fields the aggregation reads are modelled

use crate::modules::provider::domain::value_objects::EpisodeNumber;
use serde::Deserialize;

pub const NOT_FOUND_MESSAGE: &str = "Anime not found";

/// `/meta/anilist/episodes/{id}`: an episode array, or `{ message }` on failure
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EpisodesResponse {
    Episodes(Vec<ConsumetEpisode>),
    Message { message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumetEpisode {
    pub id: String,
    #[serde(default, deserialize_with = "EpisodeNumber::deserialize_lenient")]
    pub number: Option<EpisodeNumber>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_filler: Option<bool>,
}

/// `/anime/gogoanime/info/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GogoanimeInfoResponse {
    Info(GogoanimeInfo),
    Message { message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GogoanimeInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub episodes: Vec<GogoanimeEpisode>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GogoanimeEpisode {
    pub id: String,
    #[serde(default, deserialize_with = "EpisodeNumber::deserialize_lenient")]
    pub number: Option<EpisodeNumber>,
    #[serde(default)]
    pub url: Option<String>,
}
