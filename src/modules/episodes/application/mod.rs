pub mod aggregation_pipeline;
pub mod cache_coordinator;
pub mod dto;
pub mod service;

pub use aggregation_pipeline::{AggregationPipeline, FetchMode, MetadataFetch, PipelineOutput};
pub use cache_coordinator::CacheCoordinator;
pub use dto::{EpisodeRequest, EpisodeResponse};
pub use service::EpisodeService;
