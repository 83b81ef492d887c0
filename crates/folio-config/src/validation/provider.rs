//! Validation for the `[provider]` section. Unset values are not checked.

use crate::schema::FolioConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &FolioConfig) {
    let provider = &config.provider;

    if let Some(temperature) = provider.temperature {
        validate_range_f64(errors, "provider.temperature", temperature, 0.0, 2.0);
    }
    if let Some(max_tokens) = provider.max_tokens {
        validate_range(errors, "provider.max_tokens", max_tokens, 1, 8192);
    }
    if let Some(window) = provider.history_window {
        validate_range(errors, "provider.history_window", window, 1, 50);
    }
    if let Some(timeout) = provider.timeout_secs {
        validate_range(errors, "provider.timeout_secs", timeout, 1, 600);
    }

    let base_url = provider.base_url.trim();
    if !base_url.is_empty() && !base_url.starts_with("http://") && !base_url.starts_with("https://")
    {
        errors.push(format!("provider.base_url = {base_url} must be an http(s) URL"));
    }
}
