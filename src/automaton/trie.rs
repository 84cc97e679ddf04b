//! Arena-backed character trie holding the dictionary.
//!
//! All nodes live in one contiguous Vec and refer to their children by index,
//! so the whole automaton is a single owned value: cloning it is a flat copy,
//! and publishing a new one is a pointer swap.
//!
//! Ignorable characters never become edges. A word's terminal flag sits on the
//! node reached by its last non-ignorable character.

use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::ignorable::{is_all_ignorable, is_ignorable};
use crate::FilterError;

/// Index of a node in a [`Dictionary`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id for arena slot `index`, or `None` past `u32::MAX`.
    #[inline]
    pub fn from_index(index: usize) -> Option<NodeId> {
        u32::try_from(index).ok().map(NodeId)
    }
}

/// A node in the dictionary trie, stored in the arena.
///
/// Most nodes below the first level have one or two children, so the edge
/// list stays inline until it grows past four entries.
#[derive(Clone, Debug, Default)]
struct TrieNode {
    /// Children as (char, index) pairs, kept sorted by char for binary search
    children: SmallVec<[(char, NodeId); 4]>,
    /// Some dictionary word ends here
    terminal: bool,
}

/// The word automaton: a trie of codepoints with terminal flags.
///
/// An empty dictionary is a lone root with no children and matches nothing.
#[derive(Clone, Debug)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(TrieNode::default());
        Self { nodes, words: 0 }
    }

    /// Build a dictionary from a wordlist.
    ///
    /// Fails on the first word made only of ignorable characters.
    pub fn from_words<I>(words: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref())?;
        }
        Ok(dictionary)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `ch` out of `node`, if there is one.
    #[inline]
    pub fn lookup(&self, node: NodeId, ch: char) -> Option<NodeId> {
        let children = &self.nodes[node.index()].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| children[pos].1)
    }

    /// Find or create the child of `node` for `ch`.
    ///
    /// Fails only when the arena has no node ids left.
    pub fn ensure_child(&mut self, node: NodeId, ch: char) -> Result<NodeId, FilterError> {
        let children = &self.nodes[node.index()].children;
        match children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(pos) => Ok(children[pos].1),
            Err(pos) => {
                let child = self.alloc()?;
                self.nodes[node.index()].children.insert(pos, (ch, child));
                Ok(child)
            }
        }
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    #[inline]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.index()].children.is_empty()
    }

    /// Insert a word, skipping ignorable characters.
    ///
    /// Returns `Ok(true)` if the word was not already present. The empty
    /// string spells nothing and is accepted as a no-op. A non-empty word
    /// made only of ignorable characters would turn the root into a match
    /// for every position, so it is rejected and the dictionary is left
    /// unchanged. Running out of node ids fails with
    /// [`FilterError::CapacityExceeded`].
    pub fn insert(&mut self, word: &str) -> Result<bool, FilterError> {
        if word.is_empty() {
            trace!("skipping empty word");
            return Ok(false);
        }
        if is_all_ignorable(word) {
            warn!(word, "rejecting word made only of ignorable characters");
            return Err(FilterError::IgnorableWord {
                word: word.to_string(),
            });
        }

        let mut node = self.root();
        for ch in word.chars().filter(|&ch| !is_ignorable(ch)) {
            node = self.ensure_child(node, ch)?;
        }

        let end = &mut self.nodes[node.index()];
        if end.terminal {
            return Ok(false);
        }
        end.terminal = true;
        self.words += 1;
        Ok(true)
    }

    /// Number of distinct words, after ignorable characters are elided.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn alloc(&mut self) -> Result<NodeId, FilterError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(FilterError::CapacityExceeded {
            max_nodes: u64::from(u32::MAX) + 1,
        })?;
        self.nodes.push(TrieNode::default());
        Ok(id)
    }
}
