use typeahead::{Dataset, filter, matches_query};

fn fruit() -> Dataset {
    Dataset::new(["Apple", "Banana", "Orange", "Mango", "Pineapple"])
}

#[test]
fn test_filter_preserves_dataset_order() {
    let results = filter(&fruit(), "an");
    assert_eq!(results, ["Banana", "Orange", "Mango"]);
}

#[test]
fn test_empty_query_returns_nothing() {
    assert!(filter(&fruit(), "").is_empty());
    assert!(filter(&Dataset::new(["", "x"]), "").is_empty());
}

#[test]
fn test_filter_is_case_insensitive() {
    let dataset = Dataset::new(["Apple"]);
    assert_eq!(filter(&dataset, "APP"), ["Apple"]);
    assert_eq!(filter(&dataset, "pLe"), ["Apple"]);
}

#[test]
fn test_no_matches() {
    assert!(filter(&fruit(), "xyz").is_empty());
}

#[test]
fn test_every_result_contains_query() {
    let dataset = Dataset::new([
        "alpha", "Beta", "GAMMA", "delta", "epsilon", "Zeta", "eta", "theta",
    ]);
    for query in ["a", "ta", "ET", "mm", "z", "eps", "q"] {
        let results = filter(&dataset, query);
        for item in &results {
            assert!(matches_query(item, query), "{item:?} should contain {query:?}");
        }

        // Subsequence of the dataset, in order
        let mut remaining = dataset.iter();
        for item in &results {
            assert!(remaining.any(|d| d == item), "{item:?} out of order");
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let dataset = fruit();
    assert_eq!(filter(&dataset, "e"), filter(&dataset, "e"));
}

#[test]
fn test_duplicates_are_kept() {
    let dataset = Dataset::new(["kiwi", "Kiwi", "kiwi"]);
    assert_eq!(filter(&dataset, "kiwi"), ["kiwi", "Kiwi", "kiwi"]);
}

#[test]
fn test_query_whitespace_is_significant() {
    let dataset = Dataset::new(["passion fruit", "grapefruit"]);
    assert_eq!(filter(&dataset, " fruit"), ["passion fruit"]);
}

#[test]
fn test_matches_query_empty_query() {
    // Containment alone accepts the empty query; only `filter` applies the
    // empty-query policy.
    assert!(matches_query("anything", ""));
}

#[test]
fn test_every_result_can_be_highlighted() {
    let dataset = Dataset::new([
        "ΑΣ", "ΟΔΟΣ", "σοφός", "İstanbul", "İ", "Straße", "Crème Brûlée", "Banana",
    ]);
    for query in ["ς", "σ", "Σ", "i", "stan", "SS", "ß", "brû", "an", "ός"] {
        for item in filter(&dataset, query) {
            assert!(
                typeahead::find_match(&item, query).is_some(),
                "{item:?} is a result for {query:?} but has no match"
            );
        }
    }
}

#[test]
fn test_final_sigma_query_is_compared_per_character() {
    // 'Σ' lowercases to 'σ' on its own, which is not 'ς'
    let dataset = Dataset::new(["ΑΣ", "σοφός"]);
    assert_eq!(filter(&dataset, "ς"), ["σοφός"]);
    assert_eq!(filter(&dataset, "Σ"), ["ΑΣ", "σοφός"]);
}

#[test]
fn test_match_inside_single_char_expansion_is_not_a_result() {
    let dataset = Dataset::new(["İ", "ix"]);
    assert_eq!(filter(&dataset, "i"), ["ix"]);
}
