//! sensitive-words: trie-based sensitive word detection and redaction
//!
//! A wordlist is loaded into an in-memory character trie. Text is then checked
//! with [`SensitiveWordFilter::contains`], searched with
//! [`SensitiveWordFilter::find_all`] or masked with
//! [`SensitiveWordFilter::replace`]. Separator noise such as spaces, `-` and
//! `|` is ignored on both sides, so `b-a-d w o r d` still matches `badword`.
//!
//! ```
//! # use sensitive_words::{FilterConfig, SensitiveWordFilter};
//! let filter = SensitiveWordFilter::with_words(FilterConfig::default(), ["badword"]).unwrap();
//!
//! assert!(filter.contains("this is b-a-d-w-o-r-d here"));
//! assert_eq!(filter.replace("this is b-a-d-w-o-r-d here", "*"), "this is ************* here");
//! ```
//!
//! For shared concurrent access, wrap in Arc:
//! ```
//! # use sensitive_words::SensitiveWordFilter;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(SensitiveWordFilter::default());
//! let reader = Arc::clone(&filter);
//! filter.set_dictionary(["spam"]).unwrap();
//! assert!(reader.contains("no spam please"));
//! ```

mod automaton;
mod config;
mod ignorable;
mod redact;

use std::borrow::Cow;
use std::sync::Arc;

pub use automaton::{scan_from, Dictionary, Match, NodeId, SharedDictionary};
pub use config::{FilterConfig, MatchPolicy};
pub use ignorable::is_ignorable;
pub use redact::mask_for;

/// Errors that can occur while changing the dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A non-empty word made only of ignorable characters. It would match
    /// the empty string at every position.
    #[error("word {word:?} consists only of ignorable characters")]
    IgnorableWord { word: String },
    /// The dictionary arena ran out of node ids.
    #[error("dictionary exceeds {max_nodes} nodes")]
    CapacityExceeded { max_nodes: u64 },
}

/// The sensitive word filter
///
/// Owns the live dictionary and the configuration. Queries are lock-free and
/// each runs against one consistent dictionary; dictionary updates are
/// serialized and published atomically.
#[derive(Debug, Default)]
pub struct SensitiveWordFilter {
    config: FilterConfig,
    dictionary: SharedDictionary,
}

impl SensitiveWordFilter {
    /// Create a filter with an empty dictionary
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            dictionary: SharedDictionary::default(),
        }
    }

    /// Create a filter preloaded with `words`
    pub fn with_words<I>(config: FilterConfig, words: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self {
            config,
            dictionary: SharedDictionary::new(Dictionary::from_words(words)?),
        })
    }

    /// The configuration this filter was built with
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Replace the whole dictionary.
    ///
    /// The new dictionary is built before it is published; queries running
    /// meanwhile keep seeing the old one.
    pub fn set_dictionary<I>(&self, words: I) -> Result<(), FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.dictionary.rebuild(words)
    }

    /// Add words to the current dictionary, returning how many were new.
    ///
    /// Each call copies the current dictionary once and publishes the copy,
    /// so its cost grows with the dictionary size as well as the batch. Pass
    /// many words in one call rather than calling [`add_word`](Self::add_word)
    /// in a loop; for a full reload use [`set_dictionary`](Self::set_dictionary).
    pub fn add_words<I>(&self, words: I) -> Result<usize, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.dictionary.merge(words)
    }

    /// Add a single word, returning whether it was new.
    ///
    /// Costs a copy of the whole dictionary; see [`add_words`](Self::add_words).
    pub fn add_word(&self, word: &str) -> Result<bool, FilterError> {
        Ok(self.dictionary.merge([word])? > 0)
    }

    /// Pin the current dictionary for several queries against one version.
    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.dictionary.snapshot()
    }

    /// Returns true if `text` contains any dictionary word.
    pub fn contains(&self, text: &str) -> bool {
        self.dictionary.load().contains(text)
    }

    /// Distinct matched substrings, longest first, ties in lexicographic order.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.dictionary
            .load()
            .find_all(text, self.config.match_policy)
    }

    /// Every occurrence with its byte range, in text order.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        self.dictionary
            .load()
            .find_matches(text, self.config.match_policy)
    }

    /// Mask every match with `unit`, one unit per matched character.
    pub fn replace<'t>(&self, text: &'t str, unit: &str) -> Cow<'t, str> {
        self.dictionary
            .load()
            .replace(text, unit, self.config.match_policy)
    }

    /// [`replace`](Self::replace) with the configured replacement unit.
    pub fn redact<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.replace(text, &self.config.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(words: &[&str]) -> SensitiveWordFilter {
        SensitiveWordFilter::with_words(FilterConfig::default(), words).unwrap()
    }

    fn simple_filter(words: &[&str]) -> SensitiveWordFilter {
        let config = FilterConfig::default().with_match_policy(MatchPolicy::Simple);
        SensitiveWordFilter::with_words(config, words).unwrap()
    }

    #[test]
    fn test_greedy_prefers_longer_word() {
        let f = filter(&["敏感", "敏感词"]);
        assert!(f.contains("这是敏感词库"));
        assert_eq!(f.find_all("这是敏感词库"), vec!["敏感词"]);
        assert_eq!(f.replace("这是敏感词库", "*"), "这是***库");
    }

    #[test]
    fn test_simple_stops_at_shorter_word() {
        let f = simple_filter(&["敏感", "敏感词"]);
        assert!(f.contains("这是敏感词库"));
        assert_eq!(f.find_all("这是敏感词库"), vec!["敏感"]);
        assert_eq!(f.replace("这是敏感词库", "*"), "这是**词库");
    }

    #[test]
    fn test_hyphenated_evasion() {
        let f = filter(&["badword"]);
        let text = "this is b-a-d-w-o-r-d here";

        assert!(f.contains(text));
        assert_eq!(f.find_all(text), vec!["b-a-d-w-o-r-d"]);
        assert_eq!(f.replace(text, "*"), "this is ************* here");
    }

    #[test]
    fn test_empty_dictionary() {
        let f = SensitiveWordFilter::default();
        let text = "anything at all";

        assert!(!f.contains(text));
        assert!(f.find_all(text).is_empty());
        assert!(matches!(f.replace(text, "*"), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn test_overlapping_equal_length_words() {
        let f = filter(&["aa", "bb"]);
        assert_eq!(f.find_all("aabbaa"), vec!["aa", "bb"]);
        assert_eq!(f.replace("aabbaa", "*"), "******");
    }

    #[test]
    fn test_empty_text() {
        let f = filter(&["bad"]);
        assert!(!f.contains(""));
        assert!(f.find_all("").is_empty());
        assert!(f.find_matches("").is_empty());
        assert_eq!(f.replace("", "*"), "");
    }

    #[test]
    fn test_find_all_ordering() {
        let f = filter(&["cat", "dog", "horse", "ox", "bee"]);
        let found = f.find_all("ox dog cat horse bee ox");
        assert_eq!(found, vec!["horse", "bee", "cat", "dog", "ox"]);
    }

    #[test]
    fn test_find_matches_positions() {
        let f = filter(&["bad"]);
        let text = "bad, not b a d";
        let matches = f.find_matches(text);
        let spans: Vec<_> = matches.iter().map(|m| (m.range(), m.as_str())).collect();
        assert_eq!(spans, vec![(0..3, "bad"), (9..14, "b a d")]);
    }

    #[test]
    fn test_longer_match_masked_before_its_substring() {
        let f = filter(&["ab", "xaby"]);
        // "ab" also occurs inside "xaby"; the longer one is masked first
        assert_eq!(f.replace("xaby ab", "#"), "#### ##");
    }

    #[test]
    fn test_redact_uses_configured_unit() {
        let config = FilterConfig::default().with_replacement("□");
        let f = SensitiveWordFilter::with_words(config, ["spam"]).unwrap();
        assert_eq!(f.redact("no spam"), "no □□□□");
    }

    #[test]
    fn test_single_char_word() {
        let f = filter(&["x"]);
        assert_eq!(f.replace("axb", "[*]"), "a[*]b");
    }

    #[test]
    fn test_add_word_and_add_words() {
        let f = filter(&["apple"]);
        assert!(f.add_word("banana").unwrap());
        assert!(!f.add_word("b a n a n a").unwrap());
        assert_eq!(f.add_words(["cherry", "apple", "date"]).unwrap(), 2);

        assert_eq!(
            f.find_all("apple banana cherry date"),
            vec!["banana", "cherry", "apple", "date"]
        );
    }

    #[test]
    fn test_set_dictionary_replaces() {
        let f = filter(&["apple"]);
        f.set_dictionary(["banana"]).unwrap();
        assert!(!f.contains("apple"));
        assert!(f.contains("banana"));
    }

    #[test]
    fn test_ignorable_only_word_rejected() {
        let f = filter(&["apple"]);
        let err = f.add_word(" | ").unwrap_err();
        assert_eq!(
            err,
            FilterError::IgnorableWord {
                word: " | ".to_string()
            }
        );
        assert!(SensitiveWordFilter::with_words(FilterConfig::default(), ["--"]).is_err());
        assert!(!f.contains("anything"));
    }

    #[test]
    fn test_empty_word_is_noop() {
        let f = filter(&["", "apple", ""]);
        assert_eq!(f.snapshot().word_count(), 1);
        assert!(!f.contains("pear"));
        assert!(!f.add_word("").unwrap());
    }

    #[test]
    fn test_contains_iff_find_all_nonempty() {
        let f = filter(&["foo", "foobar", "敏感", "x-y"]);
        let texts = [
            "",
            "nothing",
            "fo o",
            "f|o|o",
            "xy",
            "x y z",
            "敏 感",
            "敏",
            "foob",
            "  ",
            "-foo-",
        ];
        for text in texts {
            assert_eq!(f.contains(text), !f.find_all(text).is_empty(), "{:?}", text);
        }
    }

    #[test]
    fn test_replace_idempotent() {
        let f = filter(&["foo", "foobar", "bar", "敏感词"]);
        let texts = ["foobar and bar", "f o o b a r", "这是敏感词库", "clean text"];
        for text in texts {
            let once = f.replace(text, "*").into_owned();
            let twice = f.replace(&once, "*").into_owned();
            assert_eq!(once, twice, "{:?}", text);
        }
    }

    #[test]
    fn test_ignorable_insertion_keeps_detectability() {
        let f = filter(&["word"]);
        for noise in [" ", "-", "|", "\t", "\u{3000}", " - | "] {
            let spaced: String = ["w", "o", "r", "d"].join(noise);
            let text = format!("a {} b", spaced);
            assert_eq!(f.find_all(&text), vec![spaced.clone()], "{:?}", noise);
        }
    }

    #[test]
    fn test_greedy_never_shorter_than_simple() {
        let words = ["a", "ab", "abc", "abcd", "b", "bcd"];
        let greedy = filter(&words).snapshot();
        let simple = simple_filter(&words).snapshot();
        let text = "abcd ab-c bcdx a";

        for (start, _) in text.char_indices() {
            let g = scan_from(&greedy, text, start, MatchPolicy::Greedy);
            let s = scan_from(&simple, text, start, MatchPolicy::Simple);
            assert_eq!(g.is_some(), s.is_some());
            assert!(g >= s, "start {}: greedy {:?} simple {:?}", start, g, s);
        }
    }

    #[test]
    fn test_snapshot_is_consistent_across_queries() {
        let f = filter(&["apple"]);
        let snapshot = f.snapshot();
        f.set_dictionary(["banana"]).unwrap();

        assert!(snapshot.contains("apple"));
        assert_eq!(snapshot.find_all("apple", MatchPolicy::Greedy), vec!["apple"]);
        assert!(!f.contains("apple"));
    }

    #[test]
    fn test_filter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SensitiveWordFilter>();
    }
}
