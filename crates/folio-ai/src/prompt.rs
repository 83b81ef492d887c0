//! Fixed instruction texts sent alongside visitor questions.

/// Shown when a provider answers with no text at all.
pub const NO_RESPONSE_TEXT: &str = "No response text returned.";

/// Sent as the follow-up message when an answer looks cut off.
pub const CONTINUE_PROMPT: &str =
    "Continue EXACTLY from where you stopped. Do not repeat earlier text. Keep the same format.";

/// Wrap a visitor question with the output requirements every answer must follow.
pub fn wrap_question(question: &str) -> String {
    format!(
        "QUESTION:\n{question}\n\n\
         STRICT OUTPUT REQUIREMENTS:\n\
         - Plain text only (no markdown).\n\
         - If the user asked for a number of bullet points, return EXACTLY that many numbered lines.\n\
         - Do not invent facts. If unsure, say you don't have that detail available.\n\
         - Keep the answer recruiter-friendly and structured.\n"
    )
}
