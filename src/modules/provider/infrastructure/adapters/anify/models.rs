// Anify `/info/{id}?fields=[episodes]` response shapes

use crate::modules::provider::domain::value_objects::EpisodeNumber;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AnifyInfo {
    #[serde(default)]
    pub episodes: Option<AnifyEpisodes>,
}

/// Entries stay raw; `into_provider_episodes` decodes them one at a time
#[derive(Debug, Clone, Deserialize)]
pub struct AnifyEpisodes {
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnifyProviderEpisodes {
    pub provider_id: String,
    pub episodes: AnifyEpisodeList,
}

/// Providers report either one flat list (subbed) or an explicit split
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnifyEpisodeList {
    Flat(Vec<AnifyEpisode>),
    Split {
        #[serde(default)]
        sub: Vec<AnifyEpisode>,
        #[serde(default)]
        dub: Vec<AnifyEpisode>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnifyEpisode {
    pub id: String,
    #[serde(default, deserialize_with = "EpisodeNumber::deserialize_lenient")]
    pub number: Option<EpisodeNumber>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_filler: Option<bool>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AnifyInfo {
    /// Provider listings, empty when the payload carries none
    ///
    /// Entries that do not decode are logged and skipped.
    pub fn into_provider_episodes(self) -> Vec<AnifyProviderEpisodes> {
        self.episodes
            .and_then(|e| e.data)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| {
                let provider = entry
                    .get("providerId")
                    .and_then(|id| id.as_str())
                    .unwrap_or("<unknown>")
                    .to_string();
                serde_json::from_value::<AnifyProviderEpisodes>(entry)
                    .map_err(|e| {
                        log::warn!("Anify: Skipping malformed listing for '{}': {}", provider, e);
                    })
                    .ok()
            })
            .collect()
    }
}
