//! Configuration schema types for folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod provider;
mod system;

pub use assistant::*;
pub use provider::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for folio.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub assistant: AssistantConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}
