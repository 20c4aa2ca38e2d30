use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// @module: Character, word and sentence statistics

// Unicode-aware: \w covers letters, digits and underscore in any script
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("valid word pattern"));
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").expect("valid line break pattern"));

/// Rewrite `\r\n` and lone `\r` line breaks as `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(text, "\n")
}

/// Basic statistics of a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of Unicode scalar values
    pub chars: usize,
    /// Number of maximal word-character runs
    pub words: usize,
    /// Number of maximal runs of terminal punctuation
    pub sentences: usize,
}

impl TextStats {
    /// Count characters, words and sentences of `text`
    ///
    /// Line breaks are normalized first, so `\r\n` counts as one character.
    pub fn count(text: &str) -> Self {
        let text = normalize_newlines(text);
        let text = text.as_ref();
        Self {
            chars: text.chars().count(),
            words: WORD.find_iter(text).count(),
            sentences: SENTENCE_END.find_iter(text).count(),
        }
    }
}
