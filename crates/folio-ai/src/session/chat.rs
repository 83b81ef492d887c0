//! The send path: admission, completion, continuation, failure handling.

use tracing::{debug, warn};

use crate::classify::FailureKind;
use crate::prompt::{wrap_question, CONTINUE_PROMPT, NO_RESPONSE_TEXT};
use crate::truncation::looks_truncated;
use crate::{AiError, Turn};

use super::manager::ChatSession;
use super::types::{BusyGuard, IgnoreReason, SendOutcome};

impl ChatSession {
    /// Ask a question and append the reply to the history.
    ///
    /// Blank input and calls made while another request is in flight are
    /// ignored without touching the history. Otherwise exactly two turns are
    /// appended: the trimmed question and one assistant turn, which carries a
    /// friendly failure message if the provider could not answer.
    ///
    /// Dropping the returned future is unsupported: the in-flight flag is
    /// released, but the question may be left in the history without a reply.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let question = text.trim();
        if question.is_empty() {
            return SendOutcome::Ignored(IgnoreReason::Empty);
        }

        let Some(_guard) = BusyGuard::acquire(&self.in_flight) else {
            debug!("Send ignored, a request is already in flight");
            return SendOutcome::Ignored(IgnoreReason::InFlight);
        };

        let history = self.append(Turn::user(question)).await;
        let system_prompt = self.system_prompt.read().await.clone();

        match self.answer(question, &system_prompt, &history).await {
            Ok((answer, continued)) => {
                self.append(Turn::assistant(answer)).await;
                SendOutcome::Answered { continued }
            }
            Err(e) => {
                let kind = FailureKind::from_error(&e);
                warn!(provider = self.provider.name(), ?kind, "Completion failed: {e}");
                self.append(Turn::assistant(kind.message(&self.options.assistant_name)))
                    .await;
                SendOutcome::Failed(kind)
            }
        }
    }

    /// Get an answer, continuing it once if it looks cut off.
    async fn answer(
        &self,
        question: &str,
        system_prompt: &str,
        history: &[Turn],
    ) -> Result<(String, bool), AiError> {
        let text = self
            .provider
            .complete_chat(&wrap_question(question), system_prompt, history)
            .await?;

        let answer = if text.trim().is_empty() {
            NO_RESPONSE_TEXT.to_string()
        } else {
            text
        };

        if !looks_truncated(&answer) {
            return Ok((answer, false));
        }

        debug!(chars = answer.len(), "Answer looks truncated, requesting continuation");

        let mut extended = history.to_vec();
        extended.push(Turn::assistant(answer.clone()));

        let continuation = self
            .provider
            .complete_chat(CONTINUE_PROMPT, system_prompt, &extended)
            .await?;

        if continuation.trim().is_empty() {
            return Ok((answer.trim().to_string(), false));
        }

        Ok((format!("{answer}\n{continuation}").trim().to_string(), true))
    }
}
