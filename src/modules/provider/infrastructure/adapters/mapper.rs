use crate::modules::provider::domain::{entities::Episode, value_objects::EpisodeNumber};

/// Converts one provider-specific episode record into the common `Episode`
pub trait EpisodeMapper<T> {
    /// `None` drops records that cannot be represented (e.g. no usable id)
    fn map_episode(&self, source: T) -> Option<Episode>;

    /// Map a list of provider records, skipping unusable ones
    fn map_episodes(&self, sources: Vec<T>) -> Vec<Episode> {
        sources
            .into_iter()
            .filter_map(|source| self.map_episode(source))
            .collect()
    }
}

/// An episode record is only usable with a non-blank id and a numeric number
pub fn usable_number(id: &str, number: Option<EpisodeNumber>) -> Option<EpisodeNumber> {
    if id.trim().is_empty() {
        return None;
    }
    if number.is_none() {
        log::debug!("Skipping episode '{}' without a numeric episode number", id);
    }
    number
}
