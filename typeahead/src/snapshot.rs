use crate::render::View;

/// The controller's observable state: what was typed and what matched.
///
/// Published through a `tokio::sync::watch` channel, so a host can wait for
/// the next change and then paint the latest value, skipping any it missed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub query: String,
    pub results: Vec<String>,
}

impl Snapshot {
    /// Build the display fragment for this state.
    pub fn view(&self, placeholder: &str) -> View {
        View::build(&self.query, &self.results, placeholder)
    }

    /// Whether the result list is drawn at all.
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
