use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Generic key-value store with per-entry expiry
///
/// Values are raw JSON strings; decoding and empty-entry policy belong to the
/// caller. Any error means the backend is unusable for this request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrites any existing value
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()>;

    async fn delete(&self, key: &str) -> AppResult<()>;
}
