//! Construction-time configuration.
//!
//! [`TrieConfig`] is plain data: embedders deserialize it from whatever
//! format they already use and hand it to
//! [`TrieBuilder::with_config`](crate::TrieBuilder::with_config).

use serde::{Deserialize, Serialize};

/// What the builder does when the same key is inserted more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later value replaces the earlier one.
    #[default]
    LastWins,
    /// The earlier value is kept and the later one is handed back.
    KeepFirst,
    /// The insertion fails with [`TrieError::DuplicateKey`](crate::TrieError::DuplicateKey).
    Reject,
}

/// Options for [`TrieBuilder`](crate::TrieBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Duplicate-key handling.
    pub duplicate_policy: DuplicatePolicy,
    /// Expected number of build nodes. Advisory: pre-sizing is capped and
    /// never fails construction.
    pub capacity_hint: usize,
}

impl TrieConfig {
    /// Returns a config with the given duplicate policy and no capacity hint.
    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            duplicate_policy,
            capacity_hint: 0,
        }
    }
}
