use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::AniZipMapper;
use super::models::AniZipMappingsResponse;
use crate::modules::provider::{
    domain::{entities::EpisodeMetadataEntry, repositories::EpisodeMetadataRepository},
    infrastructure::http_client::JsonClient,
};
use crate::shared::errors::AppResult;

/// Per-episode titles, thumbnails and air dates from ani.zip
pub struct AniZipAdapter {
    http_client: Arc<JsonClient>,
    base_url: String,
}

impl AniZipAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn mappings_url(&self, title_id: &str) -> String {
        format!(
            "{}/mappings?anilist_id={}",
            self.base_url,
            urlencoding::encode(title_id)
        )
    }

    async fn fetch(&self, title_id: &str) -> AppResult<Vec<EpisodeMetadataEntry>> {
        let response: AniZipMappingsResponse = self.http_client.get(&self.mappings_url(title_id)).await?;
        Ok(AniZipMapper::map_entries(response.episodes))
    }
}

#[async_trait]
impl EpisodeMetadataRepository for AniZipAdapter {
    async fn fetch_metadata(&self, title_id: &str) -> Vec<EpisodeMetadataEntry> {
        match self.fetch(title_id).await {
            Ok(entries) => {
                log::debug!("AniZip: {} metadata entries for '{}'", entries.len(), title_id);
                entries
            }
            Err(e) => {
                log::warn!("AniZip: Failed to fetch metadata for '{}': {}", title_id, e);
                Vec::new()
            }
        }
    }
}
