//! Autocomplete search over an in-memory dataset.
//!
//! The crate is split in two units: a stateful [`SearchController`] that owns
//! the query and the current result set, and a pure result renderer
//! ([`find_match`], [`render_row`]) that splits a result around the matched
//! span for highlighting.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod render;
pub mod snapshot;
pub mod source;

pub use config::SearchConfig;
pub use controller::SearchController;
pub use dataset::Dataset;
pub use error::{ConfigError, DatasetError};
pub use filter::{filter, matches_query};
pub use highlight::{MatchSpan, find_match};
pub use render::{InputView, Row, Segment, View, render_row};
pub use snapshot::Snapshot;
pub use source::{DelayedSource, SuggestionSource};
