//! The fixed list of candidate strings searched by the controller.

use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::DatasetError;

/// Ordered, immutable sequence of candidate strings.
///
/// Entries are kept exactly as supplied: no dedup, trimming or normalization.
/// Cloning is cheap, the items live behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    items: Arc<[String]>,
}

impl Dataset {
    /// Create a dataset from any sequence of strings.
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON array of strings.
    ///
    /// Any entry that is not a JSON string rejects the whole dataset.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(entries) = value else {
            return Err(DatasetError::NotAnArray {
                found: json_kind(&value),
            });
        };

        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::String(s) => Ok(s),
                other => Err(DatasetError::NonStringEntry {
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(items))
    }

    /// One entry per line. A trailing newline does not add an empty entry;
    /// blank lines elsewhere are kept.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Load a dataset from disk. `.json` files are parsed as a JSON array,
    /// anything else as a line list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let dataset = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_lines(&text)
        };

        log::debug!("Loaded {} entries from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// The entries in their original order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Deref for Dataset {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for Dataset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
