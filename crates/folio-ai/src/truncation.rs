//! Heuristic detection of answers that were cut off mid-way.
//!
//! A reply is suspect when it stops without closing punctuation, or when it
//! starts a numbered list that has fewer than five items. Both checks are
//! approximate: emoji endings read as truncated, long unnumbered prose that
//! stopped early does not.

use std::sync::LazyLock;

use regex::Regex;

/// Lines opening with an ordered-list marker such as `3. `.
static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[0-9]+\.\s+").unwrap());

/// Numbered lists shorter than this are treated as incomplete.
const MIN_NUMBERED_LINES: usize = 5;

/// Whether `text` looks like the model stopped before finishing.
pub fn looks_truncated(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let ends_cleanly = text.ends_with(['.', '!', '?', ')', ']', '"', '\'']);
    let numbered = numbered_line_count(text);

    !ends_cleanly || (text.contains("1.") && numbered > 0 && numbered < MIN_NUMBERED_LINES)
}

fn numbered_line_count(text: &str) -> usize {
    NUMBERED_LINE_RE.find_iter(text).count()
}
