//! The stateful half of the widget: query, results and the recompute task.

use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::render::View;
use crate::snapshot::Snapshot;
use crate::source::{DelayedSource, SuggestionSource};

/// Owns the query and the result set, and keeps the second in step with the
/// first.
///
/// Every query change issues a new recompute against the source and cancels
/// the previous one. A finished recompute is applied only if it is still the
/// latest one issued and the query has not moved on, so the displayed results
/// always belong to the last query typed, whatever order lookups complete in.
///
/// Hosts observe changes through [`subscribe`], which yields a watch receiver
/// over the current [`Snapshot`].
///
/// Non-empty queries spawn a Tokio task, so [`on_query_change`] must be called
/// from within a Tokio runtime.
///
/// # Example
///
/// ```
/// use typeahead::{Dataset, SearchConfig, SearchController};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let dataset = Dataset::new(["Apple", "Banana", "Orange", "Mango", "Pineapple"]);
/// let controller = SearchController::new(dataset, SearchConfig::default());
///
/// controller.on_query_change("an");
/// controller.settle().await;
/// assert_eq!(controller.results(), ["Banana", "Orange", "Mango"]);
/// # }
/// ```
///
/// [`subscribe`]: SearchController::subscribe
/// [`on_query_change`]: SearchController::on_query_change
pub struct SearchController {
    config: SearchConfig,
    state: Arc<watch::Sender<Snapshot>>,
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    source: Arc<dyn SuggestionSource>,
    /// Bumped on every recompute; a task may only commit its own generation.
    generation: u64,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

impl SearchController {
    /// Create a controller over an in-memory dataset, answering after
    /// `config.delay`.
    pub fn new(dataset: Dataset, config: SearchConfig) -> Self {
        let source = DelayedSource::new(dataset, config.delay);
        Self::with_source(source, config)
    }

    /// Create a controller backed by a custom source.
    pub fn with_source(source: impl SuggestionSource + 'static, config: SearchConfig) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self {
            config,
            state: Arc::new(state),
            inner: Arc::new(Mutex::new(Inner {
                source: Arc::new(source),
                generation: 0,
                cancel: None,
                task: None,
            })),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The current query text.
    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// The current result set.
    pub fn results(&self) -> Vec<String> {
        self.state.borrow().results.clone()
    }

    /// A copy of the current query and results.
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// Whether a recompute has been issued and not finished yet.
    pub fn is_pending(&self) -> bool {
        lock(&self.inner)
            .task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Watch the query and results.
    ///
    /// The receiver is marked changed whenever either one actually changes;
    /// the current state counts as already seen.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    /// Replace the query with `text` and recompute.
    ///
    /// The text is taken as is: no trimming, no validation. An empty query
    /// clears the results immediately, without a lookup.
    pub fn on_query_change(&self, text: impl Into<String>) {
        let text = text.into();
        let mut inner = lock(&self.inner);
        self.state.send_if_modified(|state| {
            if state.query == text {
                return false;
            }
            state.query.clone_from(&text);
            true
        });
        self.recompute(&mut inner, text);
    }

    /// Swap the source and recompute for the current query.
    pub fn replace_source(&self, source: impl SuggestionSource + 'static) {
        let mut inner = lock(&self.inner);
        inner.source = Arc::new(source);
        let query = self.query();
        self.recompute(&mut inner, query);
    }

    /// Swap the dataset, keeping the configured delay.
    pub fn replace_dataset(&self, dataset: Dataset) {
        self.replace_source(DelayedSource::new(dataset, self.config.delay));
    }

    /// Wait until no recompute is in flight.
    pub async fn settle(&self) {
        loop {
            let task = lock(&self.inner).task.take();
            match task {
                // A cancelled or superseded task still finishes; join errors
                // only mean it was torn down, which is fine here.
                Some(task) => {
                    let _ = task.await;
                }
                None => break,
            }
        }
    }

    /// Build the display fragment for the current state.
    pub fn view(&self) -> View {
        self.state.borrow().view(&self.config.placeholder)
    }

    fn recompute(&self, inner: &mut Inner, query: String) {
        if let Some(cancel) = inner.cancel.take() {
            cancel.cancel();
        }
        inner.task = None;
        inner.generation += 1;
        let generation = inner.generation;

        if query.is_empty() {
            debug!("SearchController: empty query, clearing results (gen={generation})");
            self.state.send_if_modified(|state| {
                let changed = state.has_results();
                state.results.clear();
                changed
            });
            return;
        }

        debug!("SearchController: issuing lookup gen={generation} query={query:?}");

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let source = Arc::clone(&inner.source);
        let shared = Arc::clone(&self.inner);
        let state = Arc::clone(&self.state);

        let task = tokio::spawn(async move {
            let items = tokio::select! {
                _ = token.cancelled() => {
                    debug!("SearchController: lookup gen={generation} cancelled");
                    return;
                }
                items = source.fetch(&query) => items,
            };
            commit(&shared, &state, generation, &query, items);
        });

        inner.cancel = Some(cancel);
        inner.task = Some(task);
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        if let Some(cancel) = lock(&self.inner).cancel.take() {
            cancel.cancel();
        }
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("config", &self.config)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Apply a finished lookup if it is still the latest for the current query.
///
/// Runs under the controller lock so a concurrent query change cannot slip in
/// between the check and the write.
fn commit(
    shared: &Mutex<Inner>,
    state: &watch::Sender<Snapshot>,
    generation: u64,
    query: &str,
    items: Vec<String>,
) {
    let inner = lock(shared);
    let is_latest = inner.generation == generation;
    let same_query = state.borrow().query == query;

    if !is_latest || !same_query {
        debug!(
            "SearchController: discarding stale lookup gen={} (latest={}) query={:?}",
            generation, inner.generation, query
        );
        return;
    }

    debug!(
        "SearchController: committing {} results for gen={} query={:?}",
        items.len(),
        generation,
        query
    );
    state.send_if_modified(|state| {
        if state.results == items {
            return false;
        }
        state.results = items;
        true
    });
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
