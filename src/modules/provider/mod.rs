// Upstream episode sources: one client per provider, normalized into the common schema
pub mod domain;
pub mod infrastructure;

pub use domain::entities::{AggregateResult, Episode, EpisodeMetadataEntry, ProviderEpisodeSet};
pub use domain::repositories::{
    EpisodeMetadataRepository, EpisodeProviderRepository, ProviderMappingRepository,
};
pub use domain::value_objects::{FetchTarget, ProviderAliasTable, ProviderId, ProviderMapping};
