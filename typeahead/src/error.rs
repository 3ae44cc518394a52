//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a dataset.
///
/// Filtering and highlighting never fail; the only fallible step is turning
/// external input into a [`Dataset`](crate::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset must be a JSON array of strings, found {found}")]
    NotAnArray { found: &'static str },

    /// Entries are never coerced; the first non-string entry rejects the load.
    #[error("dataset entry {index} must be a string, found {found}")]
    NonStringEntry { index: usize, found: &'static str },
}

impl DatasetError {
    /// Returns true if this error is caused by the shape of the data rather
    /// than by reading or parsing it.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, Self::NotAnArray { .. } | Self::NonStringEntry { .. })
    }
}

/// Errors raised while loading a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
