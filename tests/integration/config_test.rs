//! Configuration loading tests

use parlay_desk::config::{Config, LogFormatConfig};
use rust_decimal_macros::dec;
use std::time::Duration;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    assert_eq!(config.prediction.base_url, "http://localhost:5000/api");
    assert_eq!(config.prediction.timeout(), Duration::from_secs(10));
    assert_eq!(config.parlay.default_stake, dec!(10));
    assert_eq!(config.telemetry.log_format, LogFormatConfig::Pretty);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let toml = r#"
        [prediction]
        base_url = "http://predictions.internal/api"

        [storage]
        path = "/var/lib/parlays.json"

        [telemetry]
        log_level = "debug"
        log_format = "json"
    "#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.prediction.timeout_secs, 10);
    assert_eq!(config.parlay.default_stake, dec!(10));
    assert_eq!(config.telemetry.log_format, LogFormatConfig::Json);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Config::load(dir.path().join("absent.toml")).is_err());
}
