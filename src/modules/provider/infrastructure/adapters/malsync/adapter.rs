use async_trait::async_trait;
use std::sync::Arc;

use super::models::MalSyncResponse;
use crate::modules::provider::{
    domain::{
        repositories::ProviderMappingRepository,
        value_objects::{ProviderId, ProviderMapping},
    },
    infrastructure::http_client::JsonClient,
};
use crate::shared::errors::AppResult;

/// Providers the pipeline can query in mapped mode
const SUPPORTED_PROVIDERS: [&str; 2] = [ProviderId::GOGOANIME, ProviderId::ZORO];

/// Title → provider id cross-reference backed by MalSync
pub struct MalSyncAdapter {
    http_client: Arc<JsonClient>,
    /// The title id is appended verbatim (e.g. `.../mal/anime/anilist:`)
    base_url: String,
}

impl MalSyncAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.to_string(),
        }
    }

    fn mapping_url(&self, title_id: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(title_id))
    }

    async fn fetch_mappings(&self, title_id: &str) -> AppResult<Vec<ProviderMapping>> {
        let response: MalSyncResponse = self.http_client.get(&self.mapping_url(title_id)).await?;
        Ok(Self::mappings_from_response(response))
    }

    /// Keep supported sites only and split each site's entries into sub/dub ids
    pub(crate) fn mappings_from_response(response: MalSyncResponse) -> Vec<ProviderMapping> {
        response
            .sites
            .into_iter()
            .filter_map(|(site, entries)| {
                let provider_id = ProviderId::new(&site);
                if !SUPPORTED_PROVIDERS.contains(&provider_id.as_str()) {
                    return None;
                }

                let mut sub = None;
                let mut dub = None;
                for (key, entry) in &entries {
                    let identifier = entry.identifier_or(key);
                    let slot = if entry.is_dub(&identifier) { &mut dub } else { &mut sub };
                    slot.get_or_insert(identifier);
                }

                let mapping = ProviderMapping::new(provider_id, sub, dub);
                mapping.has_ids().then_some(mapping)
            })
            .collect()
    }
}

#[async_trait]
impl ProviderMappingRepository for MalSyncAdapter {
    async fn resolve(&self, title_id: &str) -> Option<Vec<ProviderMapping>> {
        match self.fetch_mappings(title_id).await {
            Ok(mappings) if mappings.is_empty() => {
                log::info!("MalSync: No supported provider mappings for '{}'", title_id);
                None
            }
            Ok(mappings) => {
                log::info!(
                    "MalSync: Resolved {} provider mappings for '{}'",
                    mappings.len(),
                    title_id
                );
                Some(mappings)
            }
            Err(e) => {
                log::warn!("MalSync: Failed to resolve mappings for '{}': {}", title_id, e);
                None
            }
        }
    }
}
