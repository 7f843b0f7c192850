//! Serialization of logging settings with the `serde` feature.

#![cfg(feature = "serde")]

use logging::{LogConfig, LogLevel};
use serde_json::json;

#[test]
fn level_serializes_as_lowercase_name() {
    assert_eq!(
        serde_json::to_value(LogLevel::Debug).expect("serialize"),
        json!("debug")
    );
    assert_eq!(
        serde_json::from_value::<LogLevel>(json!("warn")).expect("deserialize"),
        LogLevel::Warn
    );
}

#[test]
fn config_round_trips() {
    let config = LogConfig::new(LogLevel::Trace, false);
    let value = serde_json::to_value(config).expect("serialize");

    assert_eq!(value, json!({ "level": "trace", "timestamps": false }));
    assert_eq!(
        serde_json::from_value::<LogConfig>(value).expect("deserialize"),
        config
    );
}

#[test]
fn unknown_level_name_is_rejected() {
    assert!(serde_json::from_value::<LogLevel>(json!("loud")).is_err());
}
