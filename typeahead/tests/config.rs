use std::fs;
use std::time::Duration;

use typeahead::{ConfigError, SearchConfig};

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.delay, Duration::from_millis(100));
    assert_eq!(config.placeholder, "Start typing...");
}

#[test]
fn test_from_json_uses_milliseconds() {
    let config = SearchConfig::from_json(r#"{ "delay_ms": 250, "placeholder": "Fruit?" }"#).unwrap();
    assert_eq!(config.delay, Duration::from_millis(250));
    assert_eq!(config.placeholder, "Fruit?");
}

#[test]
fn test_missing_fields_keep_defaults() {
    let config = SearchConfig::from_json(r#"{ "placeholder": "Fruit?" }"#).unwrap();
    assert_eq!(config.delay, Duration::from_millis(100));

    let config = SearchConfig::from_json("{}").unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_json_round_trip() {
    let config = SearchConfig::new()
        .with_delay(Duration::from_millis(40))
        .with_placeholder("Search...");
    let json = config.to_json().unwrap();
    assert!(json.contains("\"delay_ms\": 40"));
    assert_eq!(SearchConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_rejects_bad_delay() {
    let err = SearchConfig::from_json(r#"{ "delay_ms": "soon" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_load() {
    let path = std::env::temp_dir().join(format!("typeahead-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "delay_ms": 0 }"#).unwrap();
    assert_eq!(SearchConfig::load(&path).unwrap(), SearchConfig::no_delay());
    fs::remove_file(&path).unwrap();

    let err = SearchConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
