pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use repositories::{
    EpisodeMetadataRepository, EpisodeProviderRepository, ProviderMappingRepository,
};
pub use value_objects::{EpisodeNumber, FetchTarget, ProviderAliasTable, ProviderId, ProviderMapping};
