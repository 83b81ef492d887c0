//! Groq client struct, request building, and response parsing.

use crate::{recent_turns, AiError, Role, Turn};

use super::config::GroqConfig;

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(
        &self,
        message: &str,
        system_prompt: &str,
        history: &[Turn],
    ) -> serde_json::Value {
        let mut msgs = Vec::new();

        let system = system_prompt.trim();
        if !system.is_empty() {
            msgs.push(serde_json::json!({
                "role": "system",
                "content": system,
            }));
        }

        for turn in recent_turns(history, self.config.history_window) {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            msgs.push(serde_json::json!({
                "role": role,
                "content": turn.content,
            }));
        }

        msgs.push(serde_json::json!({
            "role": "user",
            "content": message,
        }));

        serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Text of the first choice, trimmed. Missing pieces yield `""`.
    pub(crate) fn parse_response(json: &serde_json::Value) -> String {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}
