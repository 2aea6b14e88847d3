//!
//! The configuration file tests.
//!

use std::path::Path;
use std::path::PathBuf;

use gas_reporter::Config;

#[test]
fn file_values() {
    let config = Config::load(Some(Path::new("tests/data/ethgas.yaml"))).expect("Always valid");

    assert_eq!(config.src, PathBuf::from("tests/data/contracts"));
    assert_eq!(config.artifacts, PathBuf::from("tests/data/artifacts"));
    assert_eq!(config.rpc_url, "http://127.0.0.1:7545");
    assert!(config.show_time_spent);
    assert_eq!(config.output, Some(PathBuf::from("target/gas-report.json")));
}

#[test]
fn missing_default_file() {
    let config = Config::load(None).expect("Always valid");

    assert_eq!(config, Config::default());
}

#[test]
fn error_malformed() {
    assert!(Config::load(Some(Path::new("tests/data/events.ndjson"))).is_err());
}
