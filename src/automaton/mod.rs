//! Dictionary automaton and matching engine
//!
//! # Module Organization
//!
//! - `trie`: the arena-backed character trie (`Dictionary`, `NodeId`)
//! - `scan`: the scan loop and the query operations built on it
//! - `thread_safe`: the atomically swappable live dictionary (`SharedDictionary`)

mod scan;
mod thread_safe;
mod trie;

pub use scan::{scan_from, Match};
pub use thread_safe::SharedDictionary;
pub use trie::{Dictionary, NodeId};
