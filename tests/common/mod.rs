// Shared across the integration suites; not every suite uses every helper.
#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pocketledger::store::{KeyValueStore, MemoryStore, Result};

/// Wraps a [`MemoryStore`] and counts mutating calls, so tests can assert
/// that an operation issued no writes.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key).await
    }
}

/// Store whose every operation fails, for exercising the swallow-on-failure
/// contract of the adapter layer.
#[derive(Default)]
pub struct BrokenStore;

fn unavailable() -> pocketledger::errors::StoreError {
    io::Error::new(io::ErrorKind::Other, "device storage offline").into()
}

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(unavailable())
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(unavailable())
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(unavailable())
    }
}
