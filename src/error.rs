//! Error type for trie construction and fallible lookups.

use thiserror::Error;

/// Errors produced while building or querying a [`Trie`](crate::Trie).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The key was inserted twice while the builder runs with
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("duplicate key {}", lossy(.key))]
    DuplicateKey {
        /// The offending key.
        key: Vec<u8>,
    },

    /// The node graph would not fit the `u32` node index space.
    #[error("trie node capacity exceeded ({nodes} nodes)")]
    CapacityExceeded {
        /// Node count at the time of the failure.
        nodes: usize,
    },

    /// The key is not a complete entry of the trie.
    #[error("key {} not found", lossy(.key))]
    NotFound {
        /// The key that was looked up.
        key: Vec<u8>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TrieError>;

fn lossy(key: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(key))
}
