//! In-memory cache implementation with LRU eviction.
//!
//! Entries carry an optional expiry and are treated as absent once it has
//! passed. Expired entries are removed lazily on the next access to the key.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use notecache_core::cache::{Cache, Result};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory cache with LRU eviction and per-entry TTL.
///
/// `LruCache::get` updates recency, so every access takes the lock
/// exclusively. Clones share the same underlying store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` keys before the least
    /// recently used one is evicted.
    pub fn new(max_entries: NonZeroUsize) -> Self {
        Self {
            store: Arc::new(Mutex::new(LruCache::new(max_entries))),
        }
    }

    /// Number of stored entries, expired ones included.
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.store.lock().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.lock().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.lock().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        store.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cache() -> MemoryCache {
        MemoryCache::new(NonZeroUsize::new(1000).unwrap())
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = test_cache();

        cache.set("note:1", b"value", None).await.unwrap();
        let result = cache.get("note:1").await.unwrap();

        assert_eq!(result, Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = test_cache();
        assert_eq!(cache.get("note:404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = test_cache();

        cache.set("notes:all", b"[]", None).await.unwrap();
        cache.set("notes:all", b"[1]", None).await.unwrap();

        assert_eq!(cache.get("notes:all").await.unwrap(), Some(b"[1]".to_vec()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = test_cache();

        cache.set("note:1", b"value", None).await.unwrap();
        cache.delete("note:1").await.unwrap();

        assert!(cache.get("note:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let cache = test_cache();
        assert!(cache.delete("note:404").await.is_ok());
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = test_cache();

        cache
            .set("note:1", b"short-lived", Some(Duration::from_millis(50)))
            .await
            .unwrap();
        assert!(cache.get("note:1").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get("note:1").await.unwrap().is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(NonZeroUsize::new(2).unwrap());

        cache.set("note:1", b"1", None).await.unwrap();
        cache.set("note:2", b"2", None).await.unwrap();
        // Touch note:1 so note:2 becomes least recently used.
        cache.get("note:1").await.unwrap();
        cache.set("note:3", b"3", None).await.unwrap();

        assert!(cache.get("note:1").await.unwrap().is_some());
        assert!(cache.get("note:2").await.unwrap().is_none());
        assert!(cache.get("note:3").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = test_cache();
        let other = cache.clone();

        cache.set("note:1", b"value", None).await.unwrap();

        assert!(other.get("note:1").await.unwrap().is_some());
    }
}
