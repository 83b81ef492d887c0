//! Builds the completion provider selected by configuration.

use std::sync::Arc;
use std::time::Duration;

use folio_ai::{AiError, CompletionProvider, GeminiClient, GeminiConfig, GroqClient, GroqConfig};
use folio_common::{ConfigError, FolioError};
use folio_config::schema::{ProviderConfig, ProviderKind};

/// Create the configured provider, reading its API key from the environment.
pub fn build_provider(config: &ProviderConfig) -> Result<Arc<dyn CompletionProvider>, AiError> {
    build_provider_with(config, |var| std::env::var(var).ok())
}

fn build_provider_with(
    config: &ProviderConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Arc<dyn CompletionProvider>, AiError> {
    let var = config.kind.api_key_env();
    let api_key = lookup(var)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AiError::MissingApiKey {
            provider: config.kind.display_name(),
            var: var.to_string(),
        })?;

    let provider: Arc<dyn CompletionProvider> = match config.kind {
        ProviderKind::Gemini => Arc::new(GeminiClient::new(gemini_config(
            GeminiConfig::new(api_key),
            config,
        ))?),
        ProviderKind::Groq => Arc::new(GroqClient::new(groq_config(
            GroqConfig::new(api_key),
            config,
        ))?),
    };
    Ok(provider)
}

/// A missing key is a configuration problem; anything else is the client's.
pub fn startup_error(e: AiError) -> FolioError {
    match e {
        AiError::MissingApiKey { var, .. } => ConfigError::MissingEnv(var).into(),
        other => FolioError::Ai(other.to_string()),
    }
}

/// Apply the values set in `[provider]` on top of Gemini's defaults.
pub(crate) fn gemini_config(mut base: GeminiConfig, overrides: &ProviderConfig) -> GeminiConfig {
    if !overrides.model.trim().is_empty() {
        base = base.with_model(overrides.model.trim());
    }
    if !overrides.base_url.trim().is_empty() {
        base = base.with_base_url(overrides.base_url.trim());
    }
    if let Some(temperature) = overrides.temperature {
        base = base.with_temperature(temperature);
    }
    if let Some(max_tokens) = overrides.max_tokens {
        base = base.with_max_tokens(max_tokens);
    }
    if let Some(window) = overrides.history_window {
        base = base.with_history_window(window as usize);
    }
    if let Some(secs) = overrides.timeout_secs {
        base = base.with_timeout(Duration::from_secs(u64::from(secs)));
    }
    base
}

/// Apply the values set in `[provider]` on top of Groq's defaults.
pub(crate) fn groq_config(mut base: GroqConfig, overrides: &ProviderConfig) -> GroqConfig {
    if !overrides.model.trim().is_empty() {
        base = base.with_model(overrides.model.trim());
    }
    if !overrides.base_url.trim().is_empty() {
        base = base.with_base_url(overrides.base_url.trim());
    }
    if let Some(temperature) = overrides.temperature {
        base = base.with_temperature(temperature);
    }
    if let Some(max_tokens) = overrides.max_tokens {
        base = base.with_max_tokens(max_tokens);
    }
    if let Some(window) = overrides.history_window {
        base = base.with_history_window(window as usize);
    }
    if let Some(secs) = overrides.timeout_secs {
        base = base.with_timeout(Duration::from_secs(u64::from(secs)));
    }
    base
}
