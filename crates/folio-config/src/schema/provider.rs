//! Completion provider configuration.

use serde::{Deserialize, Serialize};

/// Which remote completion API to talk to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProviderKind {
    Gemini,
    #[default]
    Groq,
}

impl ProviderKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Groq => "Groq",
        }
    }

    /// Environment variable holding the API key for this provider.
    pub fn api_key_env(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "groq" => Ok(ProviderKind::Groq),
            other => Err(format!("unknown provider '{other}' (expected gemini or groq)")),
        }
    }
}

/// Provider settings. Unset values fall back to the provider's own defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// Model name; empty means the provider default.
    pub model: String,
    /// API base URL; empty means the provider default.
    pub base_url: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: Option<f64>,
    /// Maximum output tokens (valid range: 1-8192).
    pub max_tokens: Option<u32>,
    /// Number of most recent turns sent as context (valid range: 1-50).
    pub history_window: Option<u32>,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: Option<u32>,
}
