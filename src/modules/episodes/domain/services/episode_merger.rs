use std::collections::HashMap;

use crate::modules::provider::domain::{
    entities::{AggregateResult, EpisodeMetadataEntry},
    value_objects::EpisodeNumber,
};

/// Combines provider listings with the per-episode metadata overlay
pub struct EpisodeMerger;

impl EpisodeMerger {
    /// Enrich every episode of every track by number
    ///
    /// Provider order is preserved. Episodes without a matching entry are left
    /// untouched, and with no metadata the listings are returned as given.
    pub fn merge(
        providers: AggregateResult,
        metadata: Option<&[EpisodeMetadataEntry]>,
    ) -> AggregateResult {
        let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
            return providers;
        };

        let by_number = Self::index(metadata);
        let mut providers = providers;
        for set in providers.iter_mut() {
            for episode in set.tracks.episodes_mut() {
                if let Some(entry) = by_number.get(&episode.number) {
                    episode.apply_metadata(entry);
                }
            }
        }
        providers
    }

    // first entry wins when the overlay repeats a number
    fn index(metadata: &[EpisodeMetadataEntry]) -> HashMap<EpisodeNumber, &EpisodeMetadataEntry> {
        let mut by_number = HashMap::with_capacity(metadata.len());
        for entry in metadata {
            by_number.entry(entry.number).or_insert(entry);
        }
        by_number
    }
}
