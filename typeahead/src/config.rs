//! Search configuration

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delay applied before each recompute, modelling a remote lookup.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Text shown in the input while the query is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Start typing...";

/// Configuration for a [`SearchController`](crate::SearchController).
///
/// Hosts can read it from a JSON file where the delay is given in
/// milliseconds and missing fields keep their defaults:
///
/// ```json
/// { "delay_ms": 250, "placeholder": "Search fruit..." }
/// ```
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use typeahead::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_delay(Duration::from_millis(250))
///     .with_placeholder("Search fruit...");
/// assert_eq!(config.delay, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Time the source waits before answering a non-empty query.
    ///
    /// Default: 100ms
    #[serde(rename = "delay_ms", with = "millis")]
    pub delay: Duration,

    /// Placeholder for the empty input.
    ///
    /// Default: "Start typing..."
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl SearchConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recompute delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Parse a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded search config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Creates a config that answers immediately.
    pub fn no_delay() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Durations as whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
