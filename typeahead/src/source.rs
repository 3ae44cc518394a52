//! Where results come from.

use std::time::Duration;

use async_trait::async_trait;

use crate::dataset::Dataset;
use crate::filter::filter;

/// Asynchronous source of suggestions for a query.
///
/// The controller never blocks on a source: each lookup runs as a task and is
/// dropped if a newer query arrives first. Sources have no failure path; a
/// lookup that finds nothing returns an empty list.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Return the matches for a non-empty `query`, in display order.
    async fn fetch(&self, query: &str) -> Vec<String>;
}

/// In-memory source that waits a fixed delay, then filters a dataset.
///
/// Stands in for a remote lookup: the delay precedes the filter pass.
#[derive(Debug, Clone)]
pub struct DelayedSource {
    dataset: Dataset,
    delay: Duration,
}

impl DelayedSource {
    pub fn new(dataset: Dataset, delay: Duration) -> Self {
        Self { dataset, delay }
    }
}

#[async_trait]
impl SuggestionSource for DelayedSource {
    async fn fetch(&self, query: &str) -> Vec<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        filter(&self.dataset, query)
    }
}
