//! Locating the query inside a result for highlighting.

/// A result split around the first case-insensitive occurrence of the query.
///
/// All three parts borrow from the original item, so `matched` keeps the
/// item's casing and `before + matched + after` is the item byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl MatchSpan<'_> {
    /// Byte offset of the match within the item.
    pub fn start(&self) -> usize {
        self.before.len()
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.before.len() + self.matched.len()
    }
}

/// Find the first occurrence of `query` in `item`, ignoring case.
///
/// Returns `None` when the query does not occur, in which case the item is
/// shown unhighlighted. An empty query matches at offset 0 with an empty span.
///
/// Both strings are lowercased one character at a time, with no
/// context-dependent rules such as the Greek final sigma. [`filter`] uses this
/// same comparison, so every current result has a match.
///
/// Lowercasing can change the byte length of a character, so offsets found
/// in the lowercased text are mapped back to character boundaries of `item`.
/// Occurrences that start or end inside the lowercase expansion of a single
/// character are skipped.
///
/// [`filter`]: crate::filter::filter
pub fn find_match<'a>(item: &'a str, query: &str) -> Option<MatchSpan<'a>> {
    let needle = lowercase(query);
    let (lowered, boundaries) = lowercase_with_boundaries(item);

    let mut from = 0;
    loop {
        let pos = from + lowered[from..].find(&needle)?;
        let start = original_offset(&boundaries, pos);
        let end = original_offset(&boundaries, pos + needle.len());

        if let (Some(start), Some(end)) = (start, end) {
            return Some(MatchSpan {
                before: &item[..start],
                matched: &item[start..end],
                after: &item[end..],
            });
        }

        // needle is non-empty here, the empty needle always aligns at 0
        let step = lowered[pos..].chars().next().map_or(1, char::len_utf8);
        from = pos + step;
        if from > lowered.len() {
            return None;
        }
    }
}

fn lowercase(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercase `s` and record `(lowered_offset, original_offset)` at every
/// character start, plus the end of both strings.
fn lowercase_with_boundaries(s: &str) -> (String, Vec<(usize, usize)>) {
    let mut lowered = String::with_capacity(s.len());
    let mut boundaries = Vec::with_capacity(s.len() + 1);

    for (offset, c) in s.char_indices() {
        boundaries.push((lowered.len(), offset));
        lowered.extend(c.to_lowercase());
    }
    boundaries.push((lowered.len(), s.len()));

    (lowered, boundaries)
}

fn original_offset(boundaries: &[(usize, usize)], lowered_offset: usize) -> Option<usize> {
    boundaries
        .binary_search_by_key(&lowered_offset, |&(lowered, _)| lowered)
        .ok()
        .map(|i| boundaries[i].1)
}
