//! Response cache keyed by request URI.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cache entry with value and expiration.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: JsonValue,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Configuration for the response cache.
#[derive(Debug, Clone, Serialize, Deserialize, derive_getters::Getters)]
pub struct ResponseCacheConfig {
    /// TTL for cached responses (seconds)
    #[serde(default = "default_ttl")]
    ttl_secs: u64,

    /// Maximum cache size (number of entries)
    #[serde(default = "default_max_size")]
    max_size: usize,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_ttl() -> u64 {
    300
}

fn default_max_size() -> usize {
    1000
}

fn default_enabled() -> bool {
    true
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            max_size: default_max_size(),
            enabled: default_enabled(),
        }
    }
}

/// Cache for surrogate service responses, keyed by request URI.
///
/// Entries are immutable once written, so one cache can serve every lookup
/// of a story-telling run. The cache is constructed per run and passed into
/// the client, never installed as process-global state.
///
/// # Example
///
/// ```
/// use raintale_surrogate::{ResponseCache, ResponseCacheConfig};
/// use serde_json::json;
///
/// let mut cache = ResponseCache::new(ResponseCacheConfig::default());
/// cache.insert("http://example.com/api", json!({"title": "A Page"}));
/// assert!(cache.get("http://example.com/api").is_some());
/// ```
pub struct ResponseCache {
    config: ResponseCacheConfig,
    entries: HashMap<String, CacheEntry>,
    access_order: Vec<String>,
}

impl ResponseCache {
    /// Create a new response cache with configuration.
    pub fn new(config: ResponseCacheConfig) -> Self {
        tracing::debug!(
            ttl_secs = config.ttl_secs,
            max_size = config.max_size,
            enabled = config.enabled,
            "Creating new ResponseCache"
        );
        Self {
            config,
            entries: HashMap::new(),
            access_order: Vec::new(),
        }
    }

    /// Insert a response body for a request URI.
    pub fn insert(&mut self, uri: &str, value: JsonValue) {
        if !self.config.enabled {
            return;
        }

        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
            ttl: Duration::from_secs(self.config.ttl_secs),
        };

        if self.entries.len() >= self.config.max_size && !self.entries.contains_key(uri) {
            self.evict_lru();
        }

        if let Some(pos) = self.access_order.iter().position(|k| k == uri) {
            self.access_order.remove(pos);
        }
        self.access_order.push(uri.to_string());

        self.entries.insert(uri.to_string(), entry);
    }

    /// Get a cached response body for a request URI.
    ///
    /// Returns None when the entry is missing, expired, or caching is
    /// disabled.
    pub fn get(&mut self, uri: &str) -> Option<JsonValue> {
        if !self.config.enabled {
            return None;
        }

        let entry = self.entries.get(uri)?;
        if entry.is_expired() {
            tracing::debug!(uri, "cache entry expired, removing");
            self.entries.remove(uri);
            if let Some(pos) = self.access_order.iter().position(|k| k == uri) {
                self.access_order.remove(pos);
            }
            return None;
        }

        if let Some(pos) = self.access_order.iter().position(|k| k == uri) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }

        tracing::debug!(uri, "cache hit");
        self.entries.get(uri).map(|e| e.value.clone())
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_lru(&mut self) {
        if let Some(key) = self.access_order.first().cloned() {
            tracing::debug!(uri = %key, "evicting LRU cache entry");
            self.entries.remove(&key);
            self.access_order.remove(0);
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(ResponseCacheConfig::default())
    }
}
