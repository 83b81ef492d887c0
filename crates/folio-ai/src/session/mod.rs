//! Conversation session management.
//!
//! A `ChatSession` owns the append-only conversation history, admits one
//! request at a time, retries once when an answer looks cut off, and turns
//! provider failures into ordinary assistant turns.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{HistoryListener, IgnoreReason, SendOutcome, SessionOptions};
