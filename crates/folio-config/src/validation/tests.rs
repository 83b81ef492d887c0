//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = FolioConfig::default();
    config.provider.temperature = Some(2.5);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
}

#[test]
fn catches_zero_history_window() {
    let mut config = FolioConfig::default();
    config.provider.history_window = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.history_window"));
}

#[test]
fn catches_max_tokens_too_large() {
    let mut config = FolioConfig::default();
    config.provider.max_tokens = Some(100_000);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.max_tokens"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = FolioConfig::default();
    config.provider.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.base_url"));
}

#[test]
fn catches_blank_assistant_name_and_quick_prompt() {
    let mut config = FolioConfig::default();
    config.assistant.name = "  ".into();
    config.assistant.quick_prompts = vec!["ok".into(), "".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.name"));
    assert!(err.contains("assistant.quick_prompts[1]"));
    assert!(!err.contains("quick_prompts[0]"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.provider.temperature = Some(-1.0);
    config.provider.timeout_secs = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("provider.temperature"));
    assert!(err.contains("provider.timeout_secs"));
    assert!(err.contains("; "));
}
