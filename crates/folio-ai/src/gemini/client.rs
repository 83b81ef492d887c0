//! Gemini client struct, request building, and response parsing.

use crate::{recent_turns, AiError, Role, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for `generateContent`.
    ///
    /// The system instruction rides along as the first user content, since
    /// the v1 endpoint has no dedicated field for it.
    pub(crate) fn build_request_body(
        &self,
        message: &str,
        system_prompt: &str,
        history: &[Turn],
    ) -> serde_json::Value {
        let mut contents = Vec::new();

        let system = system_prompt.trim();
        if !system.is_empty() {
            contents.push(serde_json::json!({
                "role": "user",
                "parts": [{ "text": format!("SYSTEM INSTRUCTION:\n{system}") }]
            }));
        }

        for turn in recent_turns(history, self.config.history_window) {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "model",
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": turn.content }]
            }));
        }

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": message }]
        }));

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens,
            }
        })
    }

    /// Join the text parts of the first candidate. Missing pieces yield `""`.
    pub(crate) fn parse_response(json: &serde_json::Value) -> String {
        json["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
