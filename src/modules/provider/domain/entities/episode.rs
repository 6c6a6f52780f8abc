use crate::modules::provider::domain::value_objects::EpisodeNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::EpisodeMetadataEntry;

/// A single episode in the common schema every provider is normalized into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Provider-internal episode id, used to build watch links
    pub id: String,
    pub number: EpisodeNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_filler: Option<bool>,
}

impl Episode {
    pub fn new(id: impl Into<String>, number: EpisodeNumber) -> Self {
        Self {
            id: id.into(),
            number,
            title: None,
            url: None,
            image: None,
            description: None,
            air_date: None,
            is_filler: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overlay metadata fields that are present; absent ones keep provider values
    ///
    /// Metadata always wins over provider values, so applying the same entry
    /// twice yields the same episode.
    pub fn apply_metadata(&mut self, meta: &EpisodeMetadataEntry) {
        if let Some(title) = &meta.title {
            self.title = Some(title.clone());
        }
        if let Some(image) = &meta.image {
            self.image = Some(image.clone());
        }
        if let Some(overview) = &meta.overview {
            self.description = Some(overview.clone());
        }
        if let Some(air_date) = &meta.air_date {
            self.air_date = Some(air_date.clone());
        }
    }
}

/// Episodes of one track, ascending by number with no duplicate numbers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Episode>", into = "Vec<Episode>")]
pub struct EpisodeList(Vec<Episode>);

impl EpisodeList {
    /// Sort by number and drop later duplicates of the same number
    pub fn from_unsorted(mut episodes: Vec<Episode>) -> Self {
        // stable sort keeps upstream order among equal numbers
        episodes.sort_by(|a, b| a.number.cmp(&b.number));
        let mut seen = HashSet::new();
        episodes.retain(|episode| seen.insert(episode.number));
        Self(episodes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Episode> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Episode> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Episode] {
        &self.0
    }
}

impl From<Vec<Episode>> for EpisodeList {
    fn from(episodes: Vec<Episode>) -> Self {
        Self::from_unsorted(episodes)
    }
}

impl From<EpisodeList> for Vec<Episode> {
    fn from(list: EpisodeList) -> Self {
        list.0
    }
}

/// Sub and dub listings of a provider; an empty track is never stored
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodeTracks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<EpisodeList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dub: Option<EpisodeList>,
}

impl EpisodeTracks {
    pub fn new(sub: Vec<Episode>, dub: Vec<Episode>) -> Self {
        Self {
            sub: non_empty(sub),
            dub: non_empty(dub),
        }
    }

    pub fn sub_only(sub: Vec<Episode>) -> Self {
        Self::new(sub, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.sub.is_none() && self.dub.is_none()
    }

    pub fn episode_count(&self) -> usize {
        self.sub.as_ref().map_or(0, EpisodeList::len) + self.dub.as_ref().map_or(0, EpisodeList::len)
    }

    pub fn episodes_mut(&mut self) -> impl Iterator<Item = &mut Episode> {
        self.sub
            .iter_mut()
            .chain(self.dub.iter_mut())
            .flat_map(EpisodeList::iter_mut)
    }
}

fn non_empty(episodes: Vec<Episode>) -> Option<EpisodeList> {
    (!episodes.is_empty()).then(|| EpisodeList::from_unsorted(episodes))
}
