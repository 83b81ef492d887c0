//! CompletionProvider implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionProvider, Turn};

use super::client::GeminiClient;

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete_chat(
        &self,
        message: &str,
        system_prompt: &str,
        history: &[Turn],
    ) -> Result<String, AiError> {
        let body = self.build_request_body(message, system_prompt, history);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError {
                provider: "Gemini",
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        Ok(Self::parse_response(&json))
    }
}
