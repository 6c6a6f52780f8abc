pub mod cache_key;
pub mod cache_ttl;

pub use cache_key::CacheKey;
pub use cache_ttl::CacheTtl;
