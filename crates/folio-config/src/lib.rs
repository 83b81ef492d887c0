//! folio configuration system.
//!
//! TOML-based configuration for the chat assistant: persona, completion
//! provider, and logging. All sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};

use folio_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path
/// (creating it on first run) when `path` is `None`. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
