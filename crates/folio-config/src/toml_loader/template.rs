//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# folio configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
name = "Folio"
# greeting = "Hi! I'm {name}, a portfolio assistant. Ask me about education, experience, projects, or skills."
# File path or http(s) URL. A missing file just means no system instruction.
system_prompt = "folio_system.txt"
# quick_prompts = ["Who is this portfolio about?", "What are the strongest projects?"]

[provider]
# groq or gemini. API keys come from GROQ_API_KEY / GEMINI_API_KEY.
kind = "groq"
# model = ""             # empty = provider default
# base_url = ""          # empty = provider default
# temperature = 0.35     # 0.0-2.0 (groq default 0.35, gemini default 0.4)
# max_tokens = 900       # 1-8192
# history_window = 10    # 1-50 (groq default 10, gemini default 8)
# timeout_secs = 120     # 1-600

[logging]
level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
