//! Noise characters that are invisible to the matcher.
//!
//! The same predicate is applied when words are inserted into the dictionary
//! and when text is scanned, so `b-a-d`, `b a d` and `b|a|d` all spell `bad`.
//! The set is fixed: the separator punctuation below plus every codepoint with
//! the Unicode `White_Space` property, which covers the whole Z (separator)
//! category (Zs, Zl, Zp) as well as tabs and line breaks.

/// Punctuation commonly slipped between letters to dodge filters.
const SEPARATOR_PUNCTUATION: [char; 2] = ['|', '-'];

/// Returns true if `ch` is elided during construction and scanning.
#[inline]
pub fn is_ignorable(ch: char) -> bool {
    SEPARATOR_PUNCTUATION.contains(&ch) || ch.is_whitespace()
}

/// Returns true if every character of `word` is ignorable.
///
/// Such a word would make the root terminal and match the empty string at
/// every position, so insertion rejects it.
pub fn is_all_ignorable(word: &str) -> bool {
    word.chars().all(is_ignorable)
}
