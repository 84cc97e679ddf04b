//! Walking text against a [`Dictionary`].
//!
//! Every query is a sequence of independent scans, one per start position.
//! A scan follows one edge per non-ignorable character and stops as soon as
//! an edge is missing. Ignorable characters are stepped over without moving
//! in the trie but stay inside the reported span.

use std::borrow::Cow;
use std::ops::Range;

use rustc_hash::FxHashSet;

use super::trie::Dictionary;
use crate::config::MatchPolicy;
use crate::ignorable::is_ignorable;
use crate::redact::mask_for;

/// One occurrence of a dictionary word in a text.
///
/// Offsets are byte offsets into the scanned text and always fall on char
/// boundaries. The span includes any ignorable characters between the word's
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched slice of the original text.
    #[inline]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }
}

/// Scan `text` from byte offset `start` and return the exclusive byte end of
/// the match, or `None` if no word starts there.
///
/// An offset past the end of `text` or inside a multi-byte character starts
/// no match. Under [`MatchPolicy::Greedy`] the end of the longest word is
/// returned; under [`MatchPolicy::Simple`] the first (shortest) one.
pub fn scan_from(
    dictionary: &Dictionary,
    text: &str,
    start: usize,
    policy: MatchPolicy,
) -> Option<usize> {
    let Some(rest) = text.get(start..) else {
        return None;
    };
    let mut node = dictionary.root();
    let mut longest_end = None;

    for (offset, ch) in rest.char_indices() {
        if is_ignorable(ch) {
            continue;
        }

        node = match dictionary.lookup(node, ch) {
            Some(next) => next,
            None => break,
        };
        if dictionary.is_terminal(node) {
            longest_end = Some(start + offset + ch.len_utf8());
            if policy == MatchPolicy::Simple {
                break;
            }
        }
        // Leaf: nothing longer can follow.
        if !dictionary.has_children(node) {
            break;
        }
    }

    longest_end
}

impl Dictionary {
    /// Returns true if any word occurs in `text`.
    ///
    /// A greedy match exists at a position exactly when a simple one does,
    /// so the cheaper policy is always used here.
    pub fn contains(&self, text: &str) -> bool {
        if text.is_empty() || self.is_empty() {
            return false;
        }
        start_positions(text)
            .any(|start| scan_from(self, text, start, MatchPolicy::Simple).is_some())
    }

    /// Every occurrence in text order, at most one per start position.
    pub fn find_matches<'t>(&self, text: &'t str, policy: MatchPolicy) -> Vec<Match<'t>> {
        if text.is_empty() || self.is_empty() {
            return Vec::new();
        }
        start_positions(text)
            .filter_map(|start| {
                scan_from(self, text, start, policy).map(|end| Match { text, start, end })
            })
            .collect()
    }

    /// Distinct matched substrings, longest first, ties in lexicographic order.
    pub fn find_all(&self, text: &str, policy: MatchPolicy) -> Vec<String> {
        self.found_words(text, policy)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Mask every found word with `unit`, one unit per character.
    ///
    /// Words are substituted longest first so that a longer match is masked
    /// before any shorter word contained in it. Returns the input borrowed
    /// when nothing matches.
    pub fn replace<'t>(&self, text: &'t str, unit: &str, policy: MatchPolicy) -> Cow<'t, str> {
        let words = self.found_words(text, policy);
        if words.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut redacted = text.to_string();
        for word in words {
            redacted = redacted.replace(word, &mask_for(unit, word));
        }
        Cow::Owned(redacted)
    }

    fn found_words<'t>(&self, text: &'t str, policy: MatchPolicy) -> Vec<&'t str> {
        let unique: FxHashSet<&str> = self
            .find_matches(text, policy)
            .iter()
            .map(Match::as_str)
            .collect();

        let mut words: Vec<(usize, &str)> = unique
            .into_iter()
            .map(|word| (word.chars().count(), word))
            .collect();
        words.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        words.into_iter().map(|(_, word)| word).collect()
    }
}

/// Byte offsets where a match may begin.
///
/// A match never starts on an ignorable character: the same word would be
/// found one position later without the leading noise.
fn start_positions(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices()
        .filter(|&(_, ch)| !is_ignorable(ch))
        .map(|(start, _)| start)
}
