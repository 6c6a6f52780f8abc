mod episode_provider_repo;
mod mapping_repo;
mod metadata_repo;

pub use episode_provider_repo::*;
pub use mapping_repo::*;
pub use metadata_repo::*;
