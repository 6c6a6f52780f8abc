pub mod episode;
pub mod episode_metadata;
pub mod provider_episode_set;

pub use episode::{Episode, EpisodeList, EpisodeTracks};
pub use episode_metadata::EpisodeMetadataEntry;
pub use provider_episode_set::{AggregateResult, ProviderEpisodeSet};
