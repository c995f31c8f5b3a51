//! Removal of tool-call markup from message text.

use std::sync::OnceLock;

use regex::Regex;

fn tool_call_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<tool_call>.*?</tool_call>").expect("tool call pattern is valid")
    })
}

/// Strip every `<tool_call>...</tool_call>` block and trim the remainder.
///
/// Returns `None` when nothing displayable is left.
pub fn filter_message_text(text: &str) -> Option<String> {
    let stripped = tool_call_pattern().replace_all(text, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
