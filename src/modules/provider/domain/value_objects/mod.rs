pub mod episode_number;
pub mod provider_id;
pub mod provider_mapping;

pub use episode_number::EpisodeNumber;
pub use provider_id::{ProviderAliasTable, ProviderId};
pub use provider_mapping::{FetchTarget, ProviderMapping};
