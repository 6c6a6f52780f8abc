use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::ConsumetMapper;
use super::models::*;
use crate::modules::provider::{
    domain::{
        entities::{Episode, EpisodeTracks, ProviderEpisodeSet},
        repositories::EpisodeProviderRepository,
        value_objects::{FetchTarget, ProviderId, ProviderMapping},
    },
    infrastructure::{
        adapters::{
            common::{degrade, non_empty_sets, unsupported_target},
            mapper::EpisodeMapper,
        },
        http_client::JsonClient,
    },
};
use crate::shared::errors::{AppError, AppResult};

/// Primary aggregation service, queried directly by title id
pub struct ConsumetAdapter {
    http_client: Arc<JsonClient>,
    base_url: String,
    mapper: ConsumetMapper,
}

impl ConsumetAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            mapper: ConsumetMapper::new(),
        }
    }

    fn episodes_url(&self, title_id: &str, dub: bool) -> String {
        format!(
            "{}/meta/anilist/episodes/{}{}",
            self.base_url,
            urlencoding::encode(title_id),
            if dub { "?dub=true" } else { "" }
        )
    }

    async fn fetch_track(&self, title_id: &str, dub: bool) -> AppResult<Vec<Episode>> {
        let response: EpisodesResponse = self.http_client.get(&self.episodes_url(title_id, dub)).await?;
        self.episodes_from_response(response)
    }

    pub(crate) fn episodes_from_response(&self, response: EpisodesResponse) -> AppResult<Vec<Episode>> {
        match response {
            EpisodesResponse::Episodes(episodes) => Ok(self.mapper.map_episodes(episodes)),
            EpisodesResponse::Message { message } => Err(message_error(message)),
        }
    }
}

#[async_trait]
impl EpisodeProviderRepository for ConsumetAdapter {
    fn name(&self) -> &'static str {
        "Consumet"
    }

    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
        let FetchTarget::Title(title_id) = target else {
            return unsupported_target(self.name(), target);
        };

        log::info!("Consumet: Fetching episodes for title '{}'", title_id);

        let (sub, dub) = tokio::join!(
            self.fetch_track(title_id, false),
            self.fetch_track(title_id, true)
        );
        let tracks = EpisodeTracks::new(
            degrade(self.name(), target, sub),
            degrade(self.name(), target, dub),
        );

        log::info!(
            "Consumet: Found {} episodes for title '{}'",
            tracks.episode_count(),
            title_id
        );
        non_empty_sets(vec![ProviderEpisodeSet::from_consumet(
            ProviderId::gogoanime(),
            tracks,
        )])
    }
}

/// Gogoanime info endpoint on the same service, queried by mapped sub/dub ids
pub struct GogoanimeAdapter {
    http_client: Arc<JsonClient>,
    base_url: String,
    mapper: ConsumetMapper,
}

impl GogoanimeAdapter {
    pub fn new(http_client: Arc<JsonClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            mapper: ConsumetMapper::new(),
        }
    }

    fn info_url(&self, provider_id: &str) -> String {
        format!(
            "{}/anime/gogoanime/info/{}",
            self.base_url,
            urlencoding::encode(provider_id)
        )
    }

    /// A missing id skips the request entirely
    async fn fetch_track(&self, provider_id: Option<&str>) -> AppResult<Vec<Episode>> {
        let Some(provider_id) = provider_id else {
            return Ok(Vec::new());
        };
        let response: GogoanimeInfoResponse = self.http_client.get(&self.info_url(provider_id)).await?;
        self.episodes_from_response(response)
    }

    pub(crate) fn episodes_from_response(&self, response: GogoanimeInfoResponse) -> AppResult<Vec<Episode>> {
        match response {
            GogoanimeInfoResponse::Info(info) => Ok(self.mapper.map_episodes(info.episodes)),
            GogoanimeInfoResponse::Message { message } => Err(message_error(message)),
        }
    }

    async fn fetch_mapped(&self, target: &FetchTarget, mapping: &ProviderMapping) -> Vec<ProviderEpisodeSet> {
        let (sub, dub) = tokio::join!(
            self.fetch_track(mapping.sub.as_deref()),
            self.fetch_track(mapping.dub.as_deref())
        );
        let tracks = EpisodeTracks::new(
            degrade(self.name(), target, sub),
            degrade(self.name(), target, dub),
        );

        log::info!(
            "Gogoanime: Found {} episodes for {}",
            tracks.episode_count(),
            target.describe()
        );
        non_empty_sets(vec![ProviderEpisodeSet::from_consumet(
            ProviderId::gogoanime(),
            tracks,
        )])
    }
}

#[async_trait]
impl EpisodeProviderRepository for GogoanimeAdapter {
    fn name(&self) -> &'static str {
        "Gogoanime"
    }

    async fn fetch_episodes(&self, target: &FetchTarget) -> Vec<ProviderEpisodeSet> {
        match target {
            FetchTarget::Mapped(mapping) if mapping.has_ids() => self.fetch_mapped(target, mapping).await,
            FetchTarget::Mapped(_) => Vec::new(),
            FetchTarget::Title(_) => unsupported_target(self.name(), target),
        }
    }
}

fn message_error(message: String) -> AppError {
    if message == NOT_FOUND_MESSAGE {
        AppError::NotFound(message)
    } else {
        AppError::MalformedPayload(format!("unexpected message payload: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> Arc<JsonClient> {
        Arc::new(JsonClient::new("Consumet", Duration::from_secs(1), 10.0).unwrap())
    }

    #[test]
    fn builds_sub_and_dub_urls() {
        let adapter = ConsumetAdapter::new(client(), "https://consumet.example/");
        assert_eq!(
            adapter.episodes_url("21", false),
            "https://consumet.example/meta/anilist/episodes/21"
        );
        assert_eq!(
            adapter.episodes_url("21", true),
            "https://consumet.example/meta/anilist/episodes/21?dub=true"
        );
    }

    #[test]
    fn not_found_sentinel_is_not_found_error() {
        let adapter = ConsumetAdapter::new(client(), "https://consumet.example");
        let result = adapter.episodes_from_response(EpisodesResponse::Message {
            message: NOT_FOUND_MESSAGE.to_string(),
        });
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn non_numeric_episode_does_not_drop_the_track() {
        let adapter = ConsumetAdapter::new(client(), "https://consumet.example");
        let response: EpisodesResponse = serde_json::from_str(
            r#"[{"id":"a-1","number":1},{"id":"a-sp","number":"Special"}]"#,
        )
        .unwrap();
        let episodes = adapter.episodes_from_response(response).unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].id, "a-1");
    }

    #[test]
    fn gogoanime_info_maps_episodes() {
        let adapter = GogoanimeAdapter::new(client(), "https://consumet.example");
        let response: GogoanimeInfoResponse = serde_json::from_str(
            r#"{"episodes":[{"id":"x-episode-2","number":2},{"id":"x-episode-1","number":1}]}"#,
        )
        .unwrap();
        let episodes = adapter.episodes_from_response(response).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(
            adapter.info_url("x"),
            "https://consumet.example/anime/gogoanime/info/x"
        );
    }

    #[tokio::test]
    async fn gogoanime_without_ids_makes_no_request() {
        let adapter = GogoanimeAdapter::new(client(), "http://127.0.0.1:9");
        let target = FetchTarget::Mapped(ProviderMapping::new(ProviderId::gogoanime(), None, None));
        assert!(adapter.fetch_episodes(&target).await.is_empty());
    }

    #[tokio::test]
    async fn consumet_ignores_mapped_targets() {
        let adapter = ConsumetAdapter::new(client(), "http://127.0.0.1:9");
        let target = FetchTarget::Mapped(ProviderMapping::new(
            ProviderId::gogoanime(),
            Some("s1".to_string()),
            None,
        ));
        assert!(adapter.fetch_episodes(&target).await.is_empty());
    }
}
