//! Immutable prefix trie.
//!
//! Construction goes through [`TrieBuilder`], which grows an arena of nodes
//! with sorted children and then freezes it into a breadth-first table:
//! sibling nodes get consecutive ids, each node carries the byte of its
//! incoming edge, and values are stored in lexicographic key order. Child
//! lookup is a binary search over at most 256 sibling labels, or a direct
//! index when a node has all 256 children.

pub mod builder;
pub mod iter;
pub mod map;
pub(crate) mod node;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use builder::TrieBuilder;
pub use iter::{Keys, PrefixIter, Values};
pub use map::Trie;
