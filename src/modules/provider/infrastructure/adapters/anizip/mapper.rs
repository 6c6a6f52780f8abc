use super::models::AniZipEpisode;
use crate::modules::provider::domain::{entities::EpisodeMetadataEntry, value_objects::EpisodeNumber};

pub struct AniZipMapper;

impl AniZipMapper {
    /// Specials use non-numeric keys and have no counterpart in provider tracks
    pub fn map_entry(key: &str, source: AniZipEpisode) -> Option<EpisodeMetadataEntry> {
        let number = EpisodeNumber::parse(key)?;

        let mut entry = EpisodeMetadataEntry::new(number);
        entry.title = source.title.as_ref().and_then(|t| t.preferred());
        entry.air_date = source.airdate.or(source.air_date_utc);
        entry.image = source.image;
        entry.overview = source.overview.filter(|o| !o.trim().is_empty());
        entry.runtime = source
            .runtime
            .filter(|r| r.is_finite() && *r >= 0.0)
            .map(|r| r.round() as u32);
        Some(entry)
    }

    pub fn map_entries<I>(episodes: I) -> Vec<EpisodeMetadataEntry>
    where
        I: IntoIterator<Item = (String, AniZipEpisode)>,
    {
        let mut entries: Vec<EpisodeMetadataEntry> = episodes
            .into_iter()
            .filter_map(|(key, episode)| Self::map_entry(&key, episode))
            .collect();
        entries.sort_by(|a, b| a.number.cmp(&b.number));
        entries
    }
}
