//! Reading the config file, and writing the commented template on first run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::schema::FolioConfig;

/// `<config dir>/folio/config.toml`, e.g. `~/.config/folio/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("folio").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Parse a TOML file. Missing sections and fields take their defaults.
/// Values are not range-checked here; see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<FolioConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => io_failure("read", path, e),
    })?;

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the default config file, writing the template there if it is missing.
pub fn load_default() -> Result<FolioConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(FolioConfig::default())
        }
        loaded => loaded,
    }
}

/// Write the commented default template, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_failure("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_failure("write", path, e))?;
    info!("wrote default config to {}", path.display());
    Ok(())
}

fn io_failure(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}
