use typeahead::{MatchSpan, find_match};

#[test]
fn test_split_around_first_occurrence() {
    let span = find_match("Banana", "an").unwrap();
    assert_eq!(span.before, "B");
    assert_eq!(span.matched, "an");
    assert_eq!(span.after, "ana");
    assert_eq!(span.start(), 1);
    assert_eq!(span.end(), 3);
}

#[test]
fn test_match_keeps_item_casing() {
    let span = find_match("Apple", "APP").unwrap();
    assert_eq!(span.matched, "App");
    assert_eq!(span.before, "");
    assert_eq!(span.after, "le");
}

#[test]
fn test_no_match() {
    assert_eq!(find_match("Banana", "xyz"), None);
}

#[test]
fn test_empty_query_matches_at_start() {
    assert_eq!(
        find_match("Mango", ""),
        Some(MatchSpan {
            before: "",
            matched: "",
            after: "Mango",
        })
    );
}

#[test]
fn test_match_at_end() {
    let span = find_match("Pineapple", "APPLE").unwrap();
    assert_eq!(span.before, "Pine");
    assert_eq!(span.matched, "apple");
    assert_eq!(span.after, "");
}

#[test]
fn test_round_trip_reconstructs_item() {
    let items = ["Apple", "Banana", "Orange", "Mango", "Pineapple", "Crème Brûlée", "ÉCLAIR"];
    let queries = ["a", "AN", "e", "pple", "BRÛ", "éc", "ange"];
    for item in items {
        for query in queries {
            if let Some(span) = find_match(item, query) {
                let rebuilt = format!("{}{}{}", span.before, span.matched, span.after);
                assert_eq!(rebuilt, item);
            }
        }
    }
}

#[test]
fn test_non_ascii_case_folding() {
    let span = find_match("Crème Brûlée", "BRÛLÉE").unwrap();
    assert_eq!(span.before, "Crème ");
    assert_eq!(span.matched, "Brûlée");
    assert_eq!(span.after, "");
}

#[test]
fn test_lowercase_changing_byte_length() {
    // 'İ' (2 bytes) lowercases to "i\u{307}" (3 bytes); offsets after it
    // must still land on the original string's boundaries.
    let item = "İstanbul";
    let span = find_match(item, "stan").unwrap();
    assert_eq!(span.before, "İ");
    assert_eq!(span.matched, "stan");
    assert_eq!(span.after, "bul");
}

#[test]
fn test_occurrence_inside_single_char_expansion_is_skipped() {
    // "i" only occurs inside the expansion of 'İ', so there is no aligned match.
    assert_eq!(find_match("İ", "i"), None);
    // A later aligned occurrence is used instead.
    let span = find_match("İxi", "i").unwrap();
    assert_eq!(span.before, "İx");
    assert_eq!(span.matched, "i");
}
