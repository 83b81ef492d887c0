//! Validation for the `[assistant]` section.

use crate::schema::FolioConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    let assistant = &config.assistant;
    validate_not_blank(errors, "assistant.name", &assistant.name);
    validate_not_blank(errors, "assistant.greeting", &assistant.greeting);

    for (i, prompt) in assistant.quick_prompts.iter().enumerate() {
        validate_not_blank(errors, &format!("assistant.quick_prompts[{i}]"), prompt);
    }
}
