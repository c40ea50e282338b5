pub mod json_file;
pub mod memory;

pub use json_file::{default_store_root, JsonFileStore};
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over an asynchronous string-keyed persistent store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and JSON-decodes the value stored under `key`, returning `fallback`
/// when the key is absent, the payload is malformed, or the store fails.
/// Failures are logged and never propagated.
pub async fn read_json<T>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
{
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "discarding malformed stored value");
                fallback
            }
        },
        Ok(None) => fallback,
        Err(err) => {
            tracing::warn!(key, %err, "store read failed, using fallback");
            fallback
        }
    }
}

/// Serializes and persists `value` under `key`. A failed write is logged and
/// swallowed: the in-memory state the caller already holds is the source of
/// truth for the rest of the session.
pub async fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T)
where
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, %err, "failed to encode value, skipping write");
            return;
        }
    };
    if let Err(err) = store.set(key, &raw).await {
        tracing::warn!(key, %err, "store write failed, keeping in-memory state");
    }
}

/// Removes `key` from the store, logging and swallowing any failure.
pub async fn remove_key(store: &dyn KeyValueStore, key: &str) {
    if let Err(err) = store.remove(key).await {
        tracing::warn!(key, %err, "store remove failed");
    }
}
