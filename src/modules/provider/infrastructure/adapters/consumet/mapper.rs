use super::models::{ConsumetEpisode, GogoanimeEpisode};
use crate::modules::provider::domain::entities::Episode;
use crate::modules::provider::infrastructure::adapters::mapper::{usable_number, EpisodeMapper};

pub struct ConsumetMapper;

impl ConsumetMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsumetMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeMapper<ConsumetEpisode> for ConsumetMapper {
    fn map_episode(&self, source: ConsumetEpisode) -> Option<Episode> {
        let number = usable_number(&source.id, source.number)?;

        let mut episode = Episode::new(source.id, number);
        episode.title = source.title.filter(|t| !t.trim().is_empty());
        episode.description = source.description;
        episode.image = source.image;
        episode.air_date = source.air_date;
        episode.url = source.url;
        episode.is_filler = source.is_filler;
        Some(episode)
    }
}

impl EpisodeMapper<GogoanimeEpisode> for ConsumetMapper {
    fn map_episode(&self, source: GogoanimeEpisode) -> Option<Episode> {
        let number = usable_number(&source.id, source.number)?;

        let mut episode = Episode::new(source.id, number);
        episode.url = source.url;
        Some(episode)
    }
}
