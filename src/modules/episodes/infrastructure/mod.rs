pub mod cache;

pub use cache::{MemoryCache, RedisCache};
