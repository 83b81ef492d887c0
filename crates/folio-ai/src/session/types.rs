//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::classify::FailureKind;
use crate::Turn;

/// Called with a snapshot of the whole history after every append.
pub type HistoryListener = Box<dyn Fn(&[Turn]) + Send + Sync>;

/// Persona settings a session is created with.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Name used in failure messages.
    pub assistant_name: String,
    /// Seed assistant turn.
    pub greeting: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            assistant_name: "Folio".into(),
            greeting: "Hi! I'm Folio, a portfolio assistant. Ask me about education, \
                       experience, projects, or skills."
                .into(),
        }
    }
}

/// Why a `send` call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Empty,
    InFlight,
}

/// Result of one `send` call. The history is updated in every case except
/// `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Ignored(IgnoreReason),
    /// `continued` is set when a continuation was appended to the answer.
    Answered { continued: bool },
    Failed(FailureKind),
}

/// Guard that clears the in-flight flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to take the flag. Returns `None` if a request is already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
