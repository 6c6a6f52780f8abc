// ani.zip mapping response shapes

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct AniZipMappingsResponse {
    /// Keyed by episode label: `"1"`, `"2"`, ... and `"S1"` style specials
    #[serde(default)]
    pub episodes: BTreeMap<String, AniZipEpisode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AniZipEpisode {
    #[serde(default)]
    pub title: Option<AniZipTitles>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub air_date_utc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub runtime: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AniZipTitles {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(rename = "x-jat", default)]
    pub x_jat: Option<String>,
    #[serde(default)]
    pub ja: Option<String>,
}

impl AniZipTitles {
    /// English, then romaji, then native
    pub fn preferred(&self) -> Option<String> {
        [&self.en, &self.x_jat, &self.ja]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .cloned()
    }
}
