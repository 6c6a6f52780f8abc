use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::AnifyMapper;
use super::models::AnifyInfo;
use crate::modules::provider::{
    domain::{
        entities::ProviderEpisodeSet,
        repositories::EpisodeProviderRepository,
        value_objects::{FetchTarget, ProviderAliasTable},
    },
    infrastructure::{
        adapters::common::{degrade, non_empty_sets, unsupported_target},
        http_client::JsonClient,
    },
};
use crate::shared::errors::AppResult;

/// Secondary aggregation service, queried directly by title id
///
/// Reports several providers per title; ids are passed through the alias
/// table so its backup mirrors never collide with canonical providers.
pub struct AnifyAdapter {
    http_client: Arc<JsonClient>,
    base_url: String,
    mapper: AnifyMapper,
}

impl AnifyAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str, aliases: ProviderAliasTable) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            mapper: AnifyMapper::new(aliases),
        }
    }

    fn info_url(&self, title_id: &str) -> String {
        format!(
            "{}/info/{}?fields=[episodes]",
            self.base_url,
            urlencoding::encode(title_id)
        )
    }

    async fn fetch_info(&self, title_id: &str) -> AppResult<Vec<ProviderEpisodeSet>> {
        let info: AnifyInfo = self.http_client.get(&self.info_url(title_id)).await?;
        Ok(self.sets_from_info(info))
    }

    pub(crate) fn sets_from_info(&self, info: AnifyInfo) -> Vec<ProviderEpisodeSet> {
        let sets = info
            .into_provider_episodes()
            .into_iter()
            .filter_map(|provider| self.mapper.map_provider(provider))
            .collect();
        non_empty_sets(sets)
    }
}

#[async_trait]
impl EpisodeProviderRepository for AnifyAdapter {
    fn name(&self) -> &'static str {
        "Anify"
    }

    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
        let FetchTarget::Title(title_id) = target else {
            return unsupported_target(self.name(), target);
        };

        log::info!("Anify: Fetching episodes for title '{}'", title_id);
        let sets = degrade(self.name(), target, self.fetch_info(title_id).await);
        log::info!(
            "Anify: Found {} provider listings for title '{}'",
            sets.len(),
            title_id
        );
        sets
    }
}
