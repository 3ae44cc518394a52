//! Case-insensitive substring filtering.

use crate::highlight::find_match;

/// Returns true if `item` contains `query`, ignoring case.
///
/// Uses the same comparison as [`find_match`], so every item accepted here
/// can be highlighted. The empty query is contained in every item; callers
/// that want the empty-query policy should use [`filter`].
pub fn matches_query(item: &str, query: &str) -> bool {
    find_match(item, query).is_some()
}

/// Compute the result set for `query`.
///
/// Keeps the dataset order. An empty query yields no results by policy, not
/// because of the containment rule.
pub fn filter(items: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| matches_query(item, query))
        .cloned()
        .collect()
}
