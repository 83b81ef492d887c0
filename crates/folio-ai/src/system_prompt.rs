//! Where the system instruction comes from.

use std::path::PathBuf;

use tracing::debug;

use crate::AiError;

/// A static resource holding the system instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemPromptSource {
    File(PathBuf),
    Url(String),
}

impl SystemPromptSource {
    /// `http://` and `https://` locations are fetched; anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            SystemPromptSource::Url(location.to_string())
        } else {
            SystemPromptSource::File(PathBuf::from(location))
        }
    }

    /// Read the instruction text, trimmed.
    pub async fn load(&self) -> Result<String, AiError> {
        let text = match self {
            SystemPromptSource::File(path) => {
                debug!(path = %path.display(), "Reading system prompt");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| AiError::ParseError(format!("{}: {e}", path.display())))?
            }
            SystemPromptSource::Url(url) => {
                debug!(%url, "Fetching system prompt");
                reqwest::get(url)
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| AiError::NetworkError(e.to_string()))?
                    .text()
                    .await
                    .map_err(|e| AiError::NetworkError(e.to_string()))?
            }
        };
        Ok(text.trim().to_string())
    }
}
