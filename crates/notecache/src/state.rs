//! Shared application state.
//!
//! The concrete store and cache are chosen by feature flags; handlers only
//! see a `NoteService` over a `NoteRepository` trait object.

use std::sync::Arc;
use std::time::Duration;

use notecache_core::context::{RequestContext, RequestId};
use notecache_core::storage::NoteRepository;

use crate::config::Config;
use crate::service::NoteService;

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<NoteService<dyn NoteRepository>>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an already assembled repository.
    pub fn with_repository(repository: Arc<dyn NoteRepository>, config: &Config) -> Self {
        Self {
            notes: Arc::new(
                NoteService::new(repository).with_span(tracing::info_span!("note_service")),
            ),
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates the execution context for one request.
    pub fn request_context(&self, request_id: RequestId) -> RequestContext {
        RequestContext::new()
            .with_request_id(request_id)
            .with_timeout(self.request_timeout)
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedNoteRepository, SqliteNoteStore};

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteNoteStore::new(&config.database_url).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let repository = Arc::new(
                CachedNoteRepository::new(store, cache, config.cache_ttl())
                    .with_span(tracing::info_span!("note_repository", backend = "sqlite_memory")),
            );

            Ok(Self::with_repository(repository, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedNoteRepository, SqliteNoteStore};

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteNoteStore::new(&config.database_url).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let repository = Arc::new(
                CachedNoteRepository::new(store, cache, config.cache_ttl())
                    .with_span(tracing::info_span!("note_repository", backend = "sqlite_redis")),
            );

            Ok(Self::with_repository(repository, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedNoteRepository, InMemoryNoteStore};

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryNoteStore::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let repository = Arc::new(
                CachedNoteRepository::new(store, cache, config.cache_ttl())
                    .with_span(tracing::info_span!("note_repository", backend = "inmemory_memory")),
            );

            Ok(Self::with_repository(repository, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedNoteRepository, InMemoryNoteStore};

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryNoteStore::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let repository = Arc::new(
                CachedNoteRepository::new(store, cache, config.cache_ttl())
                    .with_span(tracing::info_span!("note_repository", backend = "inmemory_redis")),
            );

            Ok(Self::with_repository(repository, config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notecache_core::cache::{Cache, Result as CacheResult};

    use crate::storage::inmemory::InMemoryNoteStore;
    use crate::storage::CachedNoteRepository;

    struct NoCache;

    #[async_trait::async_trait]
    impl Cache for NoCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            Ok(())
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_request_context_carries_id_and_deadline() {
        let config = Config {
            request_timeout_seconds: 5,
            ..Config::default()
        };
        let repository = Arc::new(CachedNoteRepository::new(
            Arc::new(InMemoryNoteStore::new()),
            Arc::new(NoCache),
            config.cache_ttl(),
        ));
        let state = AppState::with_repository(repository, &config);
        let request_id = RequestId::new();

        let ctx = state.request_context(request_id);

        assert_eq!(ctx.request_id(), request_id);
        let deadline = ctx.deadline().unwrap();
        assert!(deadline <= tokio::time::Instant::now() + Duration::from_secs(5));
        assert!(ctx.check().is_ok());
    }

    #[cfg(all(feature = "sqlite", feature = "memory"))]
    #[tokio::test]
    async fn test_new_wires_service_over_cached_sqlite() {
        use notecache_core::note::CreateNoteRequest;

        let config = Config {
            database_url: ":memory:".to_string(),
            ..Config::default()
        };
        let state = AppState::new(&config).await.unwrap();
        let ctx = state.request_context(RequestId::new());

        let created = state
            .notes
            .create(&ctx, CreateNoteRequest::new("Buy milk"))
            .await
            .unwrap();

        assert_eq!(state.notes.get_by_id(&ctx, created.id).await.unwrap(), created);
        assert_eq!(state.notes.list_all(&ctx).await.unwrap(), vec![created]);
    }
}
