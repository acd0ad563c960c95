use std::{env, num::NonZeroUsize, time::Duration};

const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "notecache.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub database_url: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    #[cfg_attr(not(feature = "memory"), allow(dead_code))]
    pub cache_max_entries: NonZeroUsize,
    /// Deadline for a single request in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite database path (default: "notecache.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 10)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| "notecache.db".to_string()),
            redis_url: var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            cache_ttl_seconds: var("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: var("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            request_timeout_seconds: var("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.database_url, "notecache.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries.get(), 10_000);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_values_from_vars() {
        let config = config_from(&[
            ("DATABASE_URL", "/tmp/notes.db"),
            ("REDIS_URL", "redis://cache:6379"),
            ("CACHE_TTL_SECONDS", "60"),
            ("CACHE_MAX_ENTRIES", "5"),
            ("REQUEST_TIMEOUT_SECONDS", "2"),
        ]);

        assert_eq!(config.database_url, "/tmp/notes.db");
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.cache_max_entries.get(), 5);
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "five minutes"),
            ("CACHE_MAX_ENTRIES", "0"),
        ]);

        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries.get(), 10_000);
    }
}
