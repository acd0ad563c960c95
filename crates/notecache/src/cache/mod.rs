//! Cache backend implementations.
//!
//! Concrete implementations of `notecache_core::cache::Cache`, selected at
//! compile time via feature flags:
//!
//! - `memory` (default): in-process LRU cache with TTL
//! - `redis`: Redis cache shared between instances
//!
//! The two features are mutually exclusive.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p notecache --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
