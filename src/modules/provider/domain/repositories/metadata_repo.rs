use async_trait::async_trait;

use crate::modules::provider::domain::entities::EpisodeMetadataEntry;

/// Source of per-episode titles, thumbnails and air dates
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeMetadataRepository: Send + Sync {
    /// Empty on failure
    async fn fetch_metadata(&self, title_id: &str) -> Vec<EpisodeMetadataEntry>;
}
