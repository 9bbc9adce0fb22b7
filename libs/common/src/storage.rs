//! Session key-value store for the Music Portal client
//!
//! This module replaces page-local persistent storage with an explicit
//! store handed around in a context object. Two backends are provided:
//! an in-memory map scoped to one session, and Redis for a durable store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::settings::ClientConfig;

/// Key-value storage for session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Set a key-value pair
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Session store living only as long as the process
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// Redis-backed session store
///
/// Keys are namespaced as `session:<key>` so several tools can share one
/// Redis database.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: Client,
}

impl RedisSessionStore {
    /// Open a Redis client for the given URL (e.g., "redis://localhost:6379")
    pub fn new(url: &str) -> StoreResult<Self> {
        let client =
            Client::open(url).map_err(|e| StoreError::Configuration(format!("{}: {}", url, e)))?;
        info!("Redis session store initialized with URL: {}", url);
        Ok(Self { client })
    }

    async fn get_connection(&self) -> StoreResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(StoreError::Backend)
    }

    fn namespaced(key: &str) -> String {
        format!("session:{}", key)
    }

    /// Check if Redis is reachable
    pub async fn health_check(&self) -> StoreResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::Backend)?;
        Ok(pong == "PONG")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn
            .get(Self::namespaced(key))
            .await
            .map_err(StoreError::Backend)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn
            .set(Self::namespaced(key), value)
            .await
            .map_err(StoreError::Backend)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn
            .del(Self::namespaced(key))
            .await
            .map_err(StoreError::Backend)?;
        Ok(())
    }
}

/// Build the session store selected by `session_store_url`
///
/// An unset URL selects the in-memory store. `redis://` and `rediss://`
/// URLs select Redis, which must answer a PING before it is returned.
pub async fn connect_session_store(config: &ClientConfig) -> StoreResult<Arc<dyn SessionStore>> {
    match config.session_store_url.as_deref() {
        None | Some("") => {
            info!("Using in-memory session store");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        Some(url) if url.starts_with("redis://") || url.starts_with("rediss://") => {
            let store = RedisSessionStore::new(url)?;
            store.health_check().await?;
            Ok(Arc::new(store))
        }
        Some(url) => Err(StoreError::Configuration(format!(
            "Unsupported session store URL: {}",
            url
        ))),
    }
}
