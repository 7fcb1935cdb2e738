//! # `triekit` - Immutable Prefix Trie
//!
//! A compact, build-once prefix trie for hot-path lookups: matching tokens
//! against a known vocabulary, routing on string prefixes, and similar
//! workloads where construction cost is paid once and query latency
//! dominates.
//!
//! ## Guarantees
//!
//! - **Immutable after construction**: a [`Trie`] has no write path, so any
//!   number of threads may query a shared `&Trie<V>` without locks.
//! - **Allocation-free point queries**: [`Trie::contains`], [`Trie::get`],
//!   [`Trie::prefix_contains`] and [`Trie::longest_prefix_match`] only walk
//!   the node table.
//! - **Ordered enumeration**: [`Trie::iter`] and [`Trie::prefix_search`] yield
//!   entries lazily in lexicographic byte order, each key exactly once.
//! - **Explicit duplicate handling**: repeated keys follow a
//!   [`DuplicatePolicy`]; the default keeps the last value.
//!
//! ## Architecture
//!
//! 1. **Builder** ([`TrieBuilder`]): an arena of nodes with sorted children,
//!    grown one key at a time.
//! 2. **Frozen table** ([`Trie`]): the arena compacted breadth-first into
//!    three boxed slices (nodes, edge labels, values). Siblings are
//!    contiguous, so a node needs no child pointer list.
//! 3. **Traversal** ([`PrefixIter`], [`Trie::for_each_prefix`]): an explicit
//!    stack walk, so deep keys never recurse.
//!
//! ## Features
//!
//! - `tracing`: emit build-time events through the `tracing` crate.
//! - `parallel`: batch lookups over `rayon` (`Trie::get_many_par` and friends).
//!
//! ## Example
//!
//! ```rust
//! use triekit::Trie;
//!
//! let trie = Trie::from_keys(["and", "ant", "dad", "do", "dot"]);
//!
//! assert!(trie.contains("dad"));
//! assert_eq!(trie.get("do"), Some(&"do"));
//! assert!(trie.prefix_contains("da"));
//! assert!(!trie.prefix_contains("z"));
//!
//! for (key, value) in trie.prefix_search("d") {
//!     assert_eq!(key, value.as_bytes());
//! }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod error;
mod trace;
pub mod trie;

pub use config::{DuplicatePolicy, TrieConfig};
pub use error::{Result, TrieError};
pub use trie::{Keys, PrefixIter, Trie, TrieBuilder, Values};

// Compile-time assertions for memory layout and thread-safety claims.
const _: () = {
    use core::mem;

    // Frozen nodes stay at three words of 32 bits or less.
    assert!(mem::size_of::<trie::node::Node>() <= 12);

    // A trie is three boxed slices.
    assert!(mem::size_of::<Trie<u64>>() == 3 * mem::size_of::<Box<[u64]>>());
};

