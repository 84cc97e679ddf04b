//! Filter configuration.

use serde::{Deserialize, Serialize};

/// How far a scan extends past the first terminal node it reaches.
///
/// With `敏感` and `敏感词` both in the dictionary, `Greedy` reports `敏感词`
/// for the text `敏感词库` while `Simple` stops at `敏感`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Keep walking to find the longest word sharing the prefix.
    /// Masks more text in `replace`.
    #[default]
    Greedy,
    /// Stop at the shortest word. Cheaper; enough for a yes/no answer.
    Simple,
}

/// Construction-time settings for a [`SensitiveWordFilter`](crate::SensitiveWordFilter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Matching policy used by every query
    pub match_policy: MatchPolicy,
    /// Replacement unit used by `redact`
    pub replacement: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::Greedy,
            replacement: "*".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }
}
