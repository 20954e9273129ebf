//! Title slugification

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches every maximal run of characters outside `[0-9a-zA-Z]`
static SEPARATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9a-zA-Z]+").expect("separator pattern is valid"));

/// Maximum slug length in characters
const MAX_SLUG_LEN: usize = 50;

/// Converts a title into a filesystem-safe, length-bounded token
///
/// Each maximal run of non-alphanumeric characters collapses into a single
/// `_`, and the result is truncated to 50 characters. Total over any input;
/// an empty title yields an empty slug.
pub fn slugify(title: &str) -> String {
    SEPARATOR_PATTERN
        .replace_all(title, "_")
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}
