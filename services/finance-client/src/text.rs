//! Display helpers for free-form text

use std::sync::LazyLock;

use regex::Regex;

/// Longest word shown in full by default
pub const DEFAULT_WORD_LIMIT: usize = 9;

const ELLIPSIS: char = '\u{2026}';

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Shorten every word longer than `limit` characters to `limit` characters
/// followed by an ellipsis. Words are rejoined with single spaces.
///
/// Leading or trailing whitespace produces an empty word at that end, so the
/// result keeps a single space there.
pub fn limit_word_length(input: &str, limit: usize) -> String {
    WHITESPACE
        .split(input)
        .map(|word| truncate_word(word, limit))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_word(word: &str, limit: usize) -> String {
    match word.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut short = word[..cut].to_string();
            short.push(ELLIPSIS);
            short
        }
        None => word.to_string(),
    }
}
