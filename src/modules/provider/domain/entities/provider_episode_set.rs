use crate::modules::provider::domain::value_objects::ProviderId;
use serde::{Deserialize, Serialize};

use super::{Episode, EpisodeTracks};

/// One provider's normalized episode listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEpisodeSet {
    pub provider_id: ProviderId,
    /// Set for listings that came from the primary aggregation service
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub consumet: bool,
    #[serde(rename = "episodes")]
    pub tracks: EpisodeTracks,
}

impl ProviderEpisodeSet {
    pub fn new(provider_id: ProviderId, tracks: EpisodeTracks) -> Self {
        Self {
            provider_id,
            consumet: false,
            tracks,
        }
    }

    pub fn from_consumet(provider_id: ProviderId, tracks: EpisodeTracks) -> Self {
        Self {
            provider_id,
            consumet: true,
            tracks,
        }
    }

    pub fn sub_only(provider_id: ProviderId, episodes: Vec<Episode>) -> Self {
        Self::new(provider_id, EpisodeTracks::sub_only(episodes))
    }

    pub fn has_episodes(&self) -> bool {
        !self.tracks.is_empty()
    }
}

/// Ordered provider listings; the unit stored in and served from the cache
pub type AggregateResult = Vec<ProviderEpisodeSet>;
