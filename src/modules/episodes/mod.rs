pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    AggregationPipeline, CacheCoordinator, EpisodeRequest, EpisodeResponse, EpisodeService,
};
pub use domain::{CacheKey, CacheStore, CacheTtl, EpisodeMerger};
pub use infrastructure::{MemoryCache, RedisCache};
