//! Text cleaning for raw review content.

use once_cell::sync::Lazy;
use regex::Regex;

// Word characters, whitespace and basic punctuation survive cleaning;
// everything else is stripped.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,!?-]").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Cleans and normalizes a raw review text.
///
/// Strips every character outside word characters, whitespace and `. , ! ? -`,
/// collapses whitespace runs (newlines and tabs included) to single spaces and
/// trims both ends. An empty result means "drop this entry" and is the only
/// failure signal; the function itself never fails.
pub fn clean_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    // Stripping before collapsing so a removed character between two spaces
    // cannot leave a double space behind.
    let stripped = DISALLOWED.replace_all(text, "");
    WHITESPACE_RUNS
        .replace_all(stripped.trim(), " ")
        .into_owned()
}
