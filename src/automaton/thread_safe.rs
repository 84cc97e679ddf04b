//! The live dictionary shared between readers and writers.
//!
//! Readers load the current [`Dictionary`] from an [`ArcSwap`] without taking
//! any lock and keep using that snapshot for the rest of their query. Writers
//! are serialized by a mutex:
//! - a wholesale rebuild builds the new dictionary before taking the lock and
//!   holds it only for the pointer swap;
//! - an incremental merge holds the lock for its whole duration, copies the
//!   current dictionary, inserts into the copy and publishes it.
//!
//! Either way a reader sees an entire dictionary, never a partially built or
//! half-merged one.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};
use parking_lot::Mutex;
use tracing::debug;

use super::trie::Dictionary;
use crate::FilterError;

/// Atomically swappable dictionary.
///
/// `SharedDictionary` is `Send + Sync`; wrap it (or the filter that owns it)
/// in an `Arc` to share it between threads.
#[derive(Debug)]
pub struct SharedDictionary {
    /// The published dictionary - atomically swappable, lock-free reads
    current: ArcSwap<Dictionary>,
    /// Serializes rebuild publication and merges
    build_lock: Mutex<()>,
}

impl Default for SharedDictionary {
    fn default() -> Self {
        Self::new(Dictionary::new())
    }
}

impl SharedDictionary {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            current: ArcSwap::from_pointee(dictionary),
            build_lock: Mutex::new(()),
        }
    }

    /// Borrow the current dictionary for a single query.
    #[inline]
    pub fn load(&self) -> Guard<Arc<Dictionary>> {
        self.current.load()
    }

    /// Take an owned handle to the current dictionary.
    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.current.load_full()
    }

    /// Replace the dictionary with one built from `words`.
    ///
    /// The build happens outside the lock, so concurrent readers keep using
    /// the old dictionary until the swap. On error nothing is published.
    pub fn rebuild<I>(&self, words: I) -> Result<(), FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let next = Dictionary::from_words(words)?;
        let (word_count, node_count) = (next.word_count(), next.node_count());

        let _guard = self.build_lock.lock();
        self.current.store(Arc::new(next));
        debug!(word_count, node_count, "published rebuilt dictionary");
        Ok(())
    }

    /// Add `words` to the current dictionary.
    ///
    /// Returns the number of words that were not already present. The merge
    /// is all-or-nothing: if any word is rejected the current dictionary is
    /// left as it was. Every call clones the current dictionary, so it costs
    /// O(dictionary size) plus the length of the words; batch additions.
    pub fn merge<I>(&self, words: I) -> Result<usize, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let _guard = self.build_lock.lock();

        let mut next = Dictionary::clone(&self.current.load());
        let mut added = 0;
        for word in words {
            if next.insert(word.as_ref())? {
                added += 1;
            }
        }

        if added > 0 {
            let (word_count, node_count) = (next.word_count(), next.node_count());
            self.current.store(Arc::new(next));
            debug!(added, word_count, node_count, "published merged dictionary");
        }
        Ok(added)
    }
}
