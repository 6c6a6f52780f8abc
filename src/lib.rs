pub mod modules;
pub mod shared;

use modules::{
    episodes::{
        application::{AggregationPipeline, CacheCoordinator, EpisodeService},
        domain::CacheStore,
        infrastructure::RedisCache,
    },
    provider::{
        domain::value_objects::{ProviderAliasTable, ProviderId},
        infrastructure::{
            AniZipAdapter, AnifyAdapter, ConsumetAdapter, GogoanimeAdapter, JsonClient,
            MalSyncAdapter, ZoroAdapter,
        },
    },
};
use std::sync::Arc;

pub use modules::episodes::{EpisodeRequest, EpisodeResponse};
pub use shared::utils::init_logger;
pub use shared::{AppConfig, AppError, AppResult};

/// Build the episode service with one client per upstream
///
/// Without `redis_url` the service runs uncached. An unreachable Redis server
/// is not an error here; requests bypass the cache until it answers.
pub fn build_episode_service(config: &AppConfig) -> AppResult<Arc<EpisodeService>> {
    let cache: Option<Arc<dyn CacheStore>> = match &config.redis_url {
        Some(url) => Some(Arc::new(RedisCache::new(url)?)),
        None => {
            log::warn!("REDIS_URL not set, episode listings will not be cached");
            None
        }
    };

    build_episode_service_with_cache(config, cache)
}

/// Same as [`build_episode_service`] with an explicit cache backend
pub fn build_episode_service_with_cache(
    config: &AppConfig,
    cache: Option<Arc<dyn CacheStore>>,
) -> AppResult<Arc<EpisodeService>> {
    let client = |name: &str| -> AppResult<Arc<JsonClient>> {
        Ok(Arc::new(JsonClient::new(
            name,
            config.upstream_timeout,
            config.requests_per_second,
        )?))
    };

    let consumet_client = client("Consumet")?;
    let aliases = ProviderAliasTable::new(
        config.provider_aliases.clone(),
        config.excluded_providers.clone(),
    );

    let pipeline = AggregationPipeline::new(
        Arc::new(MalSyncAdapter::new(client("MalSync")?, &config.malsync_uri)),
        Arc::new(AniZipAdapter::new(client("AniZip")?, &config.anizip_uri)),
    )
    .with_mapped_provider(
        ProviderId::gogoanime(),
        Arc::new(GogoanimeAdapter::new(
            consumet_client.clone(),
            &config.consumet_uri,
        )),
    )
    .with_mapped_provider(
        ProviderId::zoro(),
        Arc::new(ZoroAdapter::new(client("Zoro")?, &config.zoro_uri)),
    )
    .with_direct_provider(Arc::new(ConsumetAdapter::new(
        consumet_client,
        &config.consumet_uri,
    )))
    .with_direct_provider(Arc::new(AnifyAdapter::new(
        client("Anify")?,
        &config.anify_uri,
        aliases,
    )));

    let coordinator = CacheCoordinator::new(Arc::new(pipeline), cache);
    Ok(Arc::new(EpisodeService::new(Arc::new(coordinator))))
}
