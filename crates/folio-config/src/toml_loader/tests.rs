//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, ProviderKind};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_folio_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
name = "Tulsi"

[provider]
kind = "gemini"
history_window = 6
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.name, "Tulsi");
    assert_eq!(config.provider.kind, ProviderKind::Gemini);
    assert_eq!(config.provider.history_window, Some(6));
    // Defaults preserved
    assert_eq!(config.assistant.system_prompt, "folio_system.txt");
    assert!(config.provider.temperature.is_none());
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::ParseError(_)));
}

#[test]
fn load_unknown_provider_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[provider]\nkind = \"openai\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[provider]\ntemperature = 9.5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.provider.temperature, Some(9.5));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.assistant.name, "Folio");
    assert_eq!(config.provider.kind, ProviderKind::Groq);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::FolioConfig;

    let config: FolioConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("folio"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn unreadable_path_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::ParseError(_)));
}
