use crate::modules::episodes::domain::repositories::CacheStore;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;

pub struct RedisCache {
    client: Client,
    connection: OnceCell<MultiplexedConnection>,
}

impl RedisCache {
    /// Only validates the URL; the server is first contacted on use
    pub fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid Redis URL: {}", e)))?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    /// One multiplexed connection shared by every call; a failed connect is
    /// retried on the next call
    async fn connection(&self) -> AppResult<MultiplexedConnection> {
        let conn = self
            .connection
            .get_or_try_init(|| self.client.get_multiplexed_async_connection())
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;
        let data: Option<String> = conn.get(key).await?;

        LogContext::cache_operation("get", key, if data.is_some() { "hit" } else { "miss" });
        Ok(data)
    }

    // seconds must be u64 for `SETEX`
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;

        LogContext::cache_operation("set", key, &format!("ttl={}s", ttl_secs));
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await?;

        LogContext::cache_operation("delete", key, "ok");
        Ok(())
    }
}
