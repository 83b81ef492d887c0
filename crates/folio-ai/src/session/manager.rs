//! ChatSession struct and history management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::system_prompt::SystemPromptSource;
use crate::{CompletionProvider, Turn};

use super::types::{HistoryListener, SessionOptions};

/// A conversation with one assistant persona over one completion provider.
pub struct ChatSession {
    /// Transport every request goes through.
    pub(super) provider: Arc<dyn CompletionProvider>,
    pub(super) options: SessionOptions,
    /// Conversation history; only ever appended to.
    pub(super) history: RwLock<Vec<Turn>>,
    /// System instruction; empty until loaded, or if loading failed.
    pub(super) system_prompt: RwLock<String>,
    /// Whether a send is currently waiting on the provider.
    pub(super) in_flight: AtomicBool,
    pub(super) listener: Option<HistoryListener>,
}

impl ChatSession {
    /// Create a session whose history holds only the greeting.
    pub fn new(provider: Arc<dyn CompletionProvider>, options: SessionOptions) -> Self {
        let greeting = Turn::assistant(options.greeting.clone());
        Self {
            provider,
            options,
            history: RwLock::new(vec![greeting]),
            system_prompt: RwLock::new(String::new()),
            in_flight: AtomicBool::new(false),
            listener: None,
        }
    }

    /// Register a callback fired after every history append.
    pub fn with_listener(mut self, listener: HistoryListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Load the system instruction. Never fails: on error the prompt stays
    /// empty and requests go out without a system instruction.
    pub async fn load_system_prompt(&self, source: &SystemPromptSource) {
        match source.load().await {
            Ok(text) => {
                debug!(chars = text.len(), "System prompt loaded");
                *self.system_prompt.write().await = text;
            }
            Err(e) => {
                warn!("System prompt unavailable, continuing without one: {e}");
                self.system_prompt.write().await.clear();
            }
        }
    }

    /// Snapshot of the conversation history.
    pub async fn history(&self) -> Vec<Turn> {
        self.history.read().await.clone()
    }

    pub async fn system_prompt(&self) -> String {
        self.system_prompt.read().await.clone()
    }

    /// Whether a request is waiting on the provider. Front ends use this to
    /// disable input and show a "thinking" indicator.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Append a turn and notify the listener. Returns the updated history.
    pub(super) async fn append(&self, turn: Turn) -> Vec<Turn> {
        let snapshot = {
            let mut history = self.history.write().await;
            history.push(turn);
            history.clone()
        };

        if let Some(ref listener) = self.listener {
            listener(&snapshot);
        }
        snapshot
    }
}
