pub mod repositories;
pub mod services;
pub mod value_objects;

pub use repositories::CacheStore;
pub use services::EpisodeMerger;
pub use value_objects::{CacheKey, CacheTtl};
