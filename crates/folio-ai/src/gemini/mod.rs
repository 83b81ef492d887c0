//! Google Gemini completion transport.
//!
//! Implements `CompletionProvider` for Gemini models via the
//! Generative Language REST API (`models/{model}:generateContent`).

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::GeminiClient;
pub use config::GeminiConfig;
