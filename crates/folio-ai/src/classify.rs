//! Turns provider failures into messages a visitor can read.
//!
//! Rate-limit responses from both providers embed a delay in their error
//! body ("Please retry in 5.8s" from Gemini, "Please try again in 5.8s" from
//! Groq). When one is present the visitor is told how long to wait;
//! anything else becomes a generic "unavailable" message.

use std::sync::LazyLock;

use regex::Regex;

use crate::AiError;

static RETRY_AFTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:retry|try again) in ([\d.]+)s").unwrap());

/// What went wrong, as far as the visitor needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited { retry_after_secs: u64 },
    Unavailable,
}

impl FailureKind {
    pub fn from_error(err: &AiError) -> Self {
        match parse_retry_seconds(&err.to_string()) {
            Some(retry_after_secs) => FailureKind::RateLimited { retry_after_secs },
            None => FailureKind::Unavailable,
        }
    }

    /// The assistant turn shown in place of an answer.
    pub fn message(&self, assistant_name: &str) -> String {
        match *self {
            FailureKind::RateLimited { retry_after_secs } => {
                let unit = if retry_after_secs == 1 { "second" } else { "seconds" };
                format!(
                    "{assistant_name} is temporarily rate-limited.\n\
                     Please try again in {retry_after_secs} {unit}."
                )
            }
            FailureKind::Unavailable => {
                format!("{assistant_name} is unavailable right now. Please try again in a moment.")
            }
        }
    }
}

/// Extract a retry delay from an error message, rounded up to whole seconds.
///
/// Returns `None` when no delay is mentioned, or when it rounds to zero or
/// is not a number.
pub fn parse_retry_seconds(message: &str) -> Option<u64> {
    let captures = RETRY_AFTER_RE.captures(message)?;
    let seconds: f64 = captures[1].parse().ok()?;
    let rounded = seconds.ceil();
    if rounded.is_finite() && rounded >= 1.0 {
        Some(rounded as u64)
    } else {
        None
    }
}
