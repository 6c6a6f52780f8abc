use async_trait::async_trait;
use std::sync::Arc;

use super::models::{ZoroEpisode, ZoroEpisodesResponse};
use crate::modules::provider::{
    domain::{
        entities::{Episode, ProviderEpisodeSet},
        repositories::EpisodeProviderRepository,
        value_objects::{FetchTarget, ProviderId},
    },
    infrastructure::{
        adapters::{
            common::{degrade, non_empty_sets, unsupported_target},
            mapper::{usable_number, EpisodeMapper},
        },
        http_client::JsonClient,
    },
};
use crate::shared::errors::AppResult;

/// Zoro episode listing, queried by its mapped (sub) id
pub struct ZoroAdapter {
    http_client: Arc<JsonClient>,
    base_url: String,
}

impl ZoroAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn episodes_url(&self, zoro_id: &str) -> String {
        format!(
            "{}/anime/episodes/{}",
            self.base_url,
            urlencoding::encode(zoro_id)
        )
    }

    async fn fetch_listing(&self, zoro_id: &str) -> AppResult<Vec<ProviderEpisodeSet>> {
        let response: ZoroEpisodesResponse = self.http_client.get(&self.episodes_url(zoro_id)).await?;
        Ok(self.sets_from_response(response))
    }

    pub(crate) fn sets_from_response(&self, response: ZoroEpisodesResponse) -> Vec<ProviderEpisodeSet> {
        let episodes = self.map_episodes(response.episodes.unwrap_or_default());
        non_empty_sets(vec![ProviderEpisodeSet::sub_only(ProviderId::zoro(), episodes)])
    }
}

impl EpisodeMapper<ZoroEpisode> for ZoroAdapter {
    fn map_episode(&self, source: ZoroEpisode) -> Option<Episode> {
        let number = usable_number(&source.episode_id, source.number)?;

        let mut episode = Episode::new(source.episode_id, number);
        episode.title = source.title.filter(|t| !t.trim().is_empty());
        episode.is_filler = source.is_filler;
        Some(episode)
    }
}

#[async_trait]
impl EpisodeProviderRepository for ZoroAdapter {
    fn name(&self) -> &'static str {
        "Zoro"
    }

    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
        let FetchTarget::Mapped(mapping) = target else {
            return unsupported_target(self.name(), target);
        };
        // Zoro lists sub and dub under the same id
        let Some(zoro_id) = mapping.sub.as_deref() else {
            return Vec::new();
        };

        log::info!("Zoro: Fetching episodes for '{}'", zoro_id);
        degrade(self.name(), target, self.fetch_listing(zoro_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn adapter() -> ZoroAdapter {
        let client = Arc::new(JsonClient::new("Zoro", Duration::from_secs(1), 10.0).unwrap());
        ZoroAdapter::new(client, "https://zoro.example")
    }

    #[test]
    fn maps_listing_into_sub_track() {
        let response: ZoroEpisodesResponse = serde_json::from_str(
            r#"{"totalEpisodes":2,"episodes":[
                {"title":"Two","episodeId":"show-100?ep=2","number":2,"isFiller":false},
                {"title":"One","episodeId":"show-100?ep=1","number":1,"isFiller":true}
            ]}"#,
        )
        .unwrap();

        let sets = adapter().sets_from_response(response);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].provider_id, ProviderId::zoro());
        let sub = sets[0].tracks.sub.as_ref().unwrap();
        assert_eq!(sub.as_slice()[0].id, "show-100?ep=1");
        assert_eq!(sub.as_slice()[0].is_filler, Some(true));
        assert!(sets[0].tracks.dub.is_none());
    }

    #[test]
    fn missing_episodes_yield_nothing() {
        let response: ZoroEpisodesResponse = serde_json::from_str(r#"{"totalEpisodes":0}"#).unwrap();
        assert!(adapter().sets_from_response(response).is_empty());
    }

    #[test]
    fn encodes_ids_in_url() {
        assert_eq!(
            adapter().episodes_url("show 100"),
            "https://zoro.example/anime/episodes/show%20100"
        );
    }
}
