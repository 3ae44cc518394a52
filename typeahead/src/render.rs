//! Display fragments for the input and the result list.
//!
//! These are plain data. A host paints them however it likes: the terminal
//! front-end draws emphasis as bold text.

use crate::highlight::find_match;

/// A run of text within a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    /// The matched span, in the item's original casing.
    Emphasis(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Emphasis(s) => s,
        }
    }

    pub fn is_emphasis(&self) -> bool {
        matches!(self, Self::Emphasis(_))
    }
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub segments: Vec<Segment>,
}

impl Row {
    /// The row's text with emphasis stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// The emphasized text, if any.
    pub fn emphasis(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.is_emphasis())
            .map(Segment::text)
    }
}

/// Render one result for `query`.
///
/// Without an occurrence the item comes back as a single plain segment.
/// Empty segments are omitted.
pub fn render_row(item: &str, query: &str) -> Row {
    let Some(span) = find_match(item, query) else {
        return Row {
            segments: vec![Segment::Plain(item.to_string())],
        };
    };

    let segments = [
        Segment::Plain(span.before.to_string()),
        Segment::Emphasis(span.matched.to_string()),
        Segment::Plain(span.after.to_string()),
    ]
    .into_iter()
    .filter(|s| !s.text().is_empty())
    .collect();

    Row { segments }
}

/// The text input, always showing the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: String,
}

impl InputView {
    /// What the input should display: the value, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub input: InputView,
    /// `None` when there are no results; the list is not drawn at all.
    pub list: Option<Vec<Row>>,
}

impl View {
    /// Build the view for a query and its result set.
    pub fn build(query: &str, results: &[String], placeholder: &str) -> Self {
        let list = (!results.is_empty())
            .then(|| results.iter().map(|item| render_row(item, query)).collect());

        Self {
            input: InputView {
                value: query.to_string(),
                placeholder: placeholder.to_string(),
            },
            list,
        }
    }
}
