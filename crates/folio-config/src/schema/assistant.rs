//! Assistant persona configuration: display name, greeting, system prompt
//! source, and quick prompts.

use serde::{Deserialize, Serialize};

/// Assistant persona settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Name used in the greeting and in failure messages.
    pub name: String,
    /// First assistant turn of every session. `{name}` is substituted.
    pub greeting: String,
    /// System instruction location: a file path or an `http(s)://` URL.
    pub system_prompt: String,
    /// Canned questions offered by the front end.
    pub quick_prompts: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Folio".into(),
            greeting: "Hi! I'm {name}, a portfolio assistant. Ask me about education, \
                       experience, projects, or skills."
                .into(),
            system_prompt: "folio_system.txt".into(),
            quick_prompts: vec![
                "Who is this portfolio about?".into(),
                "Summarize the background in 5 bullet points.".into(),
                "What are the strongest projects?".into(),
                "What skills and tools are used?".into(),
                "How can I get in touch?".into(),
            ],
        }
    }
}

impl AssistantConfig {
    /// The greeting with `{name}` replaced by the configured name.
    pub fn rendered_greeting(&self) -> String {
        self.greeting.replace("{name}", &self.name)
    }
}
