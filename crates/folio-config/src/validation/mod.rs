//! Configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod assistant;
mod helpers;
mod provider;

#[cfg(test)]
mod tests;

use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    assistant::validate_assistant(&mut errors, config);
    provider::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
