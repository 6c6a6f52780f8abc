use crate::modules::episodes::domain::repositories::CacheStore;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

// ~100 years, well inside chrono's range
const MAX_TTL_SECS: u64 = 60 * 60 * 24 * 365 * 100;

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl MemoryEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-process store with the same expiry semantics as Redis `SETEX`
///
/// Expired entries are dropped lazily on read.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<DashMap<String, MemoryEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(Utc::now()))
    }

    /// Remaining lifetime of a live entry
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Utc::now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.expires_at - now)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let now = Utc::now();
        let value = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                LogContext::cache_operation("get", key, "miss");
                return Ok(None);
            }
        };

        if value.is_none() {
            // guard dropped above; remove_if re-checks in case of a concurrent set
            self.entries.remove_if(key, |_, entry| entry.is_expired(now));
            LogContext::cache_operation("get", key, "expired");
        } else {
            LogContext::cache_operation("get", key, "hit");
        }
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()> {
        let ttl = Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
        LogContext::cache_operation("set", key, &format!("ttl={}s", ttl_secs));
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        LogContext::cache_operation("delete", key, "ok");
        Ok(())
    }
}
