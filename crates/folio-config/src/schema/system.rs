//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to the folio crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "folio=trace",
            LogLevel::Debug => "folio=debug",
            LogLevel::Info => "folio=info",
            LogLevel::Warn => "folio=warn",
            LogLevel::Error => "folio=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
