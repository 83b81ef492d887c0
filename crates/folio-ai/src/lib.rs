//! Chat engine for the folio portfolio assistant.
//!
//! Provides:
//! - Gemini and Groq completion transports behind one `CompletionProvider` trait
//! - `ChatSession`: append-only history, single in-flight request, one
//!   continuation retry for answers that look cut off
//! - Classification of provider failures into user-facing messages

pub mod classify;
pub mod gemini;
pub mod groq;
pub mod prompt;
pub mod session;
pub mod system_prompt;
pub mod truncation;

use async_trait::async_trait;

pub use classify::{parse_retry_seconds, FailureKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use groq::{GroqClient, GroqConfig};
pub use session::{ChatSession, HistoryListener, IgnoreReason, SendOutcome, SessionOptions};
pub use system_prompt::SystemPromptSource;
pub use truncation::looks_truncated;

/// A remote chat-completion endpoint.
///
/// Implementations send `[system] + [recent history] + [message]` in one
/// request and return the first candidate's text, or `""` when the response
/// carries none.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name used in logs and error text.
    fn name(&self) -> &str;

    async fn complete_chat(
        &self,
        message: &str,
        system_prompt: &str,
        history: &[Turn],
    ) -> Result<String, AiError>;
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// The last `window` turns of `history`, oldest first.
pub(crate) fn recent_turns(history: &[Turn], window: usize) -> &[Turn] {
    &history[history.len().saturating_sub(window)..]
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("{provider} API key not configured: set {var}")]
    MissingApiKey { provider: &'static str, var: String },
    #[error("{provider} error: {status}\n{body}")]
    ApiError {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_turns_keeps_the_tail() {
        let history: Vec<Turn> = (0..5).map(|i| Turn::user(i.to_string())).collect();
        let recent = recent_turns(&history, 3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].content, "2");
        assert_eq!(recent[2].content, "4");
    }

    #[test]
    fn recent_turns_with_short_history() {
        let history = vec![Turn::assistant("hi")];
        assert_eq!(recent_turns(&history, 10), &history[..]);
    }

    #[test]
    fn api_error_display_carries_status_and_body() {
        let err = AiError::ApiError {
            provider: "Groq",
            status: 429,
            body: "{\"error\":\"slow down\"}".into(),
        };
        assert_eq!(err.to_string(), "Groq error: 429\n{\"error\":\"slow down\"}");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = AiError::MissingApiKey {
            provider: "Gemini",
            var: "GEMINI_API_KEY".into(),
        };
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Turn::assistant("x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }
}
