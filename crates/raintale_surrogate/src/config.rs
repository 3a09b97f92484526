//! Surrogate client configuration.

use crate::ResponseCacheConfig;
use raintale_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the surrogate data client.
///
/// # Examples
///
/// ```
/// use raintale_surrogate::SurrogateConfig;
///
/// let config: SurrogateConfig = toml::from_str(r#"
///     endpoint = "http://mementoembed.example:5550"
///     timeout_secs = 15
/// "#).unwrap();
/// assert_eq!(config.timeout_secs, 15);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrogateConfig {
    /// Base URL of the MementoEmbed service
    pub endpoint: String,

    /// Request timeout in seconds; a timed-out fetch is treated as absent
    /// data, never as a fatal error
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response cache settings
    #[serde(default)]
    pub cache: ResponseCacheConfig,
}

fn default_timeout_secs() -> u64 {
    30
}

impl SurrogateConfig {
    /// Create a configuration for the given service endpoint with defaults.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
            cache: ResponseCacheConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// The request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
