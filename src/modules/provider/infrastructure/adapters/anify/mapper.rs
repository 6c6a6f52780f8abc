use super::models::{AnifyEpisode, AnifyEpisodeList, AnifyProviderEpisodes};
use crate::modules::provider::domain::{
    entities::{Episode, EpisodeTracks, ProviderEpisodeSet},
    value_objects::ProviderAliasTable,
};
use crate::modules::provider::infrastructure::adapters::mapper::{usable_number, EpisodeMapper};

pub struct AnifyMapper {
    aliases: ProviderAliasTable,
}

impl AnifyMapper {
    pub fn new(aliases: ProviderAliasTable) -> Self {
        Self { aliases }
    }

    /// Normalize one provider listing; excluded providers yield `None`
    pub fn map_provider(&self, source: AnifyProviderEpisodes) -> Option<ProviderEpisodeSet> {
        let Some(provider_id) = self.aliases.resolve(&source.provider_id) else {
            log::debug!("Anify: Skipping excluded provider '{}'", source.provider_id);
            return None;
        };

        let tracks = match source.episodes {
            AnifyEpisodeList::Flat(episodes) => EpisodeTracks::sub_only(self.map_episodes(episodes)),
            AnifyEpisodeList::Split { sub, dub } => {
                EpisodeTracks::new(self.map_episodes(sub), self.map_episodes(dub))
            }
        };

        Some(ProviderEpisodeSet::new(provider_id, tracks))
    }
}

impl EpisodeMapper<AnifyEpisode> for AnifyMapper {
    fn map_episode(&self, source: AnifyEpisode) -> Option<Episode> {
        let number = usable_number(&source.id, source.number)?;

        let mut episode = Episode::new(source.id, number);
        episode.title = source.title.filter(|t| !t.trim().is_empty());
        episode.image = source.img;
        episode.description = source.description;
        episode.is_filler = source.is_filler;
        Some(episode)
    }
}
