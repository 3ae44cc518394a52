use typeahead::Row;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// A run of text to print, and whether it is emphasized.
pub type Run = (String, bool);

/// Clip a row's segments to `max_width` columns, ending with an ellipsis
/// when anything was cut.
pub fn clip_row(row: &Row, max_width: usize) -> Vec<Run> {
    let total: usize = row.segments.iter().map(|s| display_width(s.text())).sum();
    if total <= max_width {
        return row
            .segments
            .iter()
            .map(|s| (s.text().to_string(), s.is_emphasis()))
            .collect();
    }

    if max_width == 0 {
        return Vec::new();
    }

    let target_width = max_width - 1;
    let mut runs = Vec::new();
    let mut width = 0;

    'segments: for segment in &row.segments {
        let mut text = String::new();
        for ch in segment.text().chars() {
            let ch_width = char_width(ch);
            if width + ch_width > target_width {
                if !text.is_empty() {
                    runs.push((text, segment.is_emphasis()));
                }
                break 'segments;
            }
            text.push(ch);
            width += ch_width;
        }
        if !text.is_empty() {
            runs.push((text, segment.is_emphasis()));
        }
    }

    runs.push(("…".to_string(), false));
    runs
}

/// Keep the tail of `s` that fits in `max_width` columns, so the end of a
/// long query stays visible next to the cursor.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = i;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeahead::render_row;

    #[test]
    fn test_clip_fits() {
        let row = render_row("Banana", "an");
        assert_eq!(
            clip_row(&row, 10),
            vec![
                ("B".to_string(), false),
                ("an".to_string(), true),
                ("ana".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_clip_inside_emphasis() {
        let row = render_row("Banana", "ana");
        assert_eq!(
            clip_row(&row, 3),
            vec![
                ("B".to_string(), false),
                ("a".to_string(), true),
                ("…".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_clip_zero_width() {
        let row = render_row("Banana", "an");
        assert!(clip_row(&row, 0).is_empty());
    }

    #[test]
    fn test_clip_wide_chars() {
        let row = render_row("日本語", "");
        let runs = clip_row(&row, 4);
        let text: String = runs.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(text, "日…");
    }

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("pineapple", 20), "pineapple");
        assert_eq!(tail_to_width("pineapple", 5), "apple");
        assert_eq!(tail_to_width("日本語", 4), "本語");
        assert_eq!(tail_to_width("abc", 0), "");
    }
}
