//! Groq completion transport.
//!
//! Implements `CompletionProvider` against Groq's OpenAI-compatible
//! chat completions endpoint (`/chat/completions`).

mod api;
mod client;
mod config;


pub use client::GroqClient;
pub use config::GroqConfig;
