//! Unit tests for config module

use ignite_sessions::{Config, Layout};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(
        config.endpoint.url,
        "https://api-myignite.techcommunity.microsoft.com/api/session/search"
    );
    assert_eq!(config.endpoint.timeout_secs, 30);
    assert_eq!(config.output.directory, ".");
    assert_eq!(config.output.json_file, "ignite_search_results.json");
    assert_eq!(config.output.layout, Layout::Detailed);
    assert!(config.validate().is_ok());
}

#[test]
fn load_without_path_returns_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn output_config_parses_from_toml() {
    let toml_str = r#"
[output]
directory = "exports"
layout = "simple"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.output.directory, "exports");
    assert_eq!(config.output.layout, Layout::Simple);
    // Unset fields keep their defaults
    assert_eq!(config.output.json_file, "ignite_search_results.json");
    assert_eq!(config.endpoint.timeout_secs, 30);
}

#[test]
fn unknown_layout_fails_to_parse() {
    let toml_str = r#"
[output]
layout = "weekly"
"#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn derived_paths_and_timeout() {
    let mut config = Config::default();
    config.output.directory = "out".to_string();
    config.endpoint.timeout_secs = 5;

    assert_eq!(config.output_dir(), Path::new("out"));
    assert_eq!(
        config.json_path(),
        Path::new("out").join("ignite_search_results.json")
    );
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(
        config.endpoint_url().unwrap().host_str(),
        Some("api-myignite.techcommunity.microsoft.com")
    );
}

#[test]
fn overrides_replace_only_given_values() {
    let mut config = Config::default();
    config.apply_overrides(None, None);
    assert_eq!(config, Config::default());

    config.apply_overrides(Some(Path::new("elsewhere")), Some(Layout::Simple));
    assert_eq!(config.output.directory, "elsewhere");
    assert_eq!(config.output.layout, Layout::Simple);
    assert_eq!(config.output.json_file, "ignite_search_results.json");
}

#[test]
fn validate_rejects_bad_values() {
    let mut config = Config::default();
    config.endpoint.url = "not a url".to_string();
    assert!(config.validate().unwrap_err().contains("endpoint.url"));

    let mut config = Config::default();
    config.endpoint.timeout_secs = 0;
    assert!(config.validate().unwrap_err().contains("timeout_secs"));

    let mut config = Config::default();
    config.output.json_file = "  ".to_string();
    assert!(config.validate().unwrap_err().contains("json_file"));
}

#[test]
fn load_reports_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[endpoint]\ntimeout_secs = 0\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn load_reports_unparsable_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[endpoint\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn save_then_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.output.layout = Layout::Simple;
    config.endpoint.timeout_secs = 90;
    config.save(&path).unwrap();

    assert_eq!(Config::load(Some(&path)).unwrap(), config);
}
