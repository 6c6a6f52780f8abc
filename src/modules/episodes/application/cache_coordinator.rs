use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use super::aggregation_pipeline::{AggregationPipeline, MetadataFetch};
use super::dto::EpisodeRequest;
use crate::modules::episodes::domain::{
    repositories::CacheStore,
    services::EpisodeMerger,
    value_objects::{CacheKey, CacheTtl},
};
use crate::modules::provider::domain::entities::{AggregateResult, EpisodeMetadataEntry};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_info, log_warn};

/// What the cache held for a title after empty/corrupt entries were evicted
#[derive(Debug, Default)]
struct CachedState {
    metadata: Option<Vec<EpisodeMetadataEntry>>,
    episodes: Option<AggregateResult>,
}

/// Decides between serving cached listings, refreshing them, or bypassing the
/// cache entirely when the backend is missing or failing
pub struct CacheCoordinator {
    pipeline: Arc<AggregationPipeline>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl CacheCoordinator {
    pub fn new(pipeline: Arc<AggregationPipeline>, cache: Option<Arc<dyn CacheStore>>) -> Self {
        Self { pipeline, cache }
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// Never fails; the worst case is an uncached computation
    pub async fn get_episodes(&self, request: &EpisodeRequest) -> AggregateResult {
        let timer = TimedOperation::new(&format!("get_episodes({})", request.title_id));

        let Some(cache) = &self.cache else {
            log_warn!(
                "No cache backend configured, computing episodes for '{}' uncached",
                request.title_id
            );
            let result = self.compute_uncached(&request.title_id).await;
            timer.finish_with_info("uncached");
            return result;
        };

        let (result, outcome) = match self.read_cached(cache.as_ref(), &request.title_id).await {
            Ok(state) => self.serve(cache.as_ref(), request, state).await,
            Err(e) => {
                LogContext::degraded("Episode cache", &e);
                (self.compute_uncached(&request.title_id).await, "bypassed")
            }
        };

        timer.finish_with_info(outcome);
        result
    }

    async fn read_cached(&self, cache: &dyn CacheStore, title_id: &str) -> AppResult<CachedState> {
        let metadata = Self::read_list(cache, &CacheKey::metadata(title_id)).await?;
        let episodes = Self::read_list(cache, &CacheKey::episodes(title_id)).await?;
        Ok(CachedState { metadata, episodes })
    }

    /// Read a JSON list, evicting it when it is empty or fails to decode
    async fn read_list<T>(cache: &dyn CacheStore, key: &CacheKey) -> AppResult<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = cache.get(key.as_str()).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(list) if !list.is_empty() => Ok(Some(list)),
            Ok(_) => {
                log_debug!("Evicting empty cache entry {}", key);
                cache.delete(key.as_str()).await?;
                Ok(None)
            }
            Err(e) => {
                let error = AppError::CacheCorruption(format!("{}: {}", key, e));
                log_warn!("{}, evicting", error);
                cache.delete(key.as_str()).await?;
                Ok(None)
            }
        }
    }

    async fn serve(
        &self,
        cache: &dyn CacheStore,
        request: &EpisodeRequest,
        state: CachedState,
    ) -> (AggregateResult, &'static str) {
        match state.episodes {
            Some(cached) if !request.refresh => {
                log_debug!("Serving cached episodes for '{}'", request.title_id);
                // metadata can change independently of the episode entry
                let merged = EpisodeMerger::merge(cached, state.metadata.as_deref());
                (merged, "cached")
            }
            _ => {
                let refreshed = self.refresh(cache, request, state.metadata).await;
                (refreshed, "refreshed")
            }
        }
    }

    async fn refresh(
        &self,
        cache: &dyn CacheStore,
        request: &EpisodeRequest,
        cached_metadata: Option<Vec<EpisodeMetadataEntry>>,
    ) -> AggregateResult {
        let title_id = request.title_id.as_str();
        let ttl = CacheTtl::for_releasing(request.releasing);
        let fetch_metadata = request.refresh || cached_metadata.is_none();

        log_info!(
            "Refreshing episodes for '{}' (forced: {}, fetch metadata: {})",
            title_id,
            request.refresh,
            fetch_metadata
        );
        let output = self.pipeline.run(title_id, fetch_metadata).await;

        if !output.providers.is_empty() {
            Self::store(cache, &CacheKey::episodes(title_id), &output.providers, ttl).await;
        }

        let metadata = match output.metadata {
            MetadataFetch::Fetched(fresh) if !fresh.is_empty() => {
                Self::store(cache, &CacheKey::metadata(title_id), &fresh, ttl).await;
                Some(fresh)
            }
            _ => cached_metadata,
        };

        EpisodeMerger::merge(output.providers, metadata.as_deref())
    }

    /// Write failures are logged and otherwise ignored
    async fn store<T>(cache: &dyn CacheStore, key: &CacheKey, value: &T, ttl: CacheTtl)
    where
        T: Serialize + ?Sized,
    {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log_warn!("Failed to serialize {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = cache.set_ex(key.as_str(), &json, ttl.as_secs()).await {
            log_warn!("Failed to persist {}: {}", key, e);
        }
    }

    /// Raw provider listings with no cache reads, writes or metadata
    async fn compute_uncached(&self, title_id: &str) -> AggregateResult {
        self.pipeline.run(title_id, false).await.providers
    }
}
