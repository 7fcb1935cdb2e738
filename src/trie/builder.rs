//! Construction stage: insertion into a node arena, then freezing.

use std::collections::VecDeque;

use crate::config::{DuplicatePolicy, TrieConfig};
use crate::error::{Result, TrieError};
use crate::trace::{debug_event, trace_event};

use super::map::Trie;
use super::node::{BuildNode, Node, MAX_NODES, MAX_PREALLOC, NO_VALUE, ROOT};

/// Collects `(key, value)` entries and freezes them into a [`Trie`].
///
/// The builder is the only mutable stage: it grows an arena of nodes with
/// sorted children, then [`build`](Self::build) compacts the arena into the
/// read-only table the trie queries.
///
/// ```
/// use triekit::{DuplicatePolicy, TrieBuilder};
///
/// let mut builder = TrieBuilder::new().duplicate_policy(DuplicatePolicy::Reject);
/// builder.insert("do", 1).unwrap();
/// builder.insert("dot", 2).unwrap();
/// assert!(builder.insert("do", 3).is_err());
///
/// let trie = builder.build();
/// assert_eq!(trie.get("do"), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct TrieBuilder<V> {
    arena: Vec<BuildNode<V>>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<V> TrieBuilder<V> {
    /// Creates an empty builder using [`DuplicatePolicy::LastWins`].
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty builder, pre-sizing the arena for about `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TrieConfig {
            capacity_hint: capacity,
            ..TrieConfig::default()
        })
    }

    /// Creates an empty builder from a [`TrieConfig`].
    ///
    /// The capacity hint is advisory: the reservation is capped and an
    /// allocation failure just leaves the arena to grow on demand.
    pub fn with_config(config: TrieConfig) -> Self {
        let mut arena = Vec::new();
        arena.push(BuildNode::new());
        let _ = arena.try_reserve(config.capacity_hint.min(MAX_PREALLOC));
        Self {
            arena,
            len: 0,
            policy: config.duplicate_policy,
        }
    }

    /// Sets the duplicate-key policy for subsequent insertions.
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the number of distinct keys inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc_node(&mut self) -> u32 {
        let idx = self.arena.len() as u32;
        self.arena.push(BuildNode::new());
        idx
    }

    /// Freezes the builder into an immutable [`Trie`].
    pub fn build(self) -> Trie<V> {
        let Self { mut arena, len, .. } = self;
        let node_count = arena.len();

        // Pass 1: depth-first in byte order, so the value table ends up in
        // lexicographic key order.
        let mut slots = vec![NO_VALUE; node_count];
        let mut values = Vec::with_capacity(len);
        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &mut arena[idx as usize];
            if let Some(value) = node.value.take() {
                slots[idx as usize] = values.len() as u32;
                values.push(value);
            }
            stack.extend(node.children.iter().rev().map(|&(_, child)| child));
        }

        // Pass 2: breadth-first, so siblings get consecutive ids.
        let mut nodes = Vec::with_capacity(node_count);
        let mut labels = Vec::with_capacity(node_count);
        let mut queue = VecDeque::with_capacity(node_count);
        queue.push_back((ROOT, 0u8));
        while let Some((idx, label)) = queue.pop_front() {
            let node = &arena[idx as usize];
            let first_child = (nodes.len() + 1 + queue.len()) as u32;
            nodes.push(Node {
                first_child,
                value: slots[idx as usize],
                child_count: node.children.len() as u16,
            });
            labels.push(label);
            queue.extend(node.children.iter().map(|&(byte, child)| (child, byte)));
        }

        debug_event!(keys = values.len(), nodes = nodes.len(), "built trie");

        Trie::from_parts(
            nodes.into_boxed_slice(),
            labels.into_boxed_slice(),
            values.into_boxed_slice(),
        )
    }
}

impl<V> Default for TrieBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieBuilder<V> {
    /// Inserts an entry, applying the builder's [`DuplicatePolicy`].
    ///
    /// Returns the value displaced by the insertion: the replaced value under
    /// [`LastWins`](DuplicatePolicy::LastWins), the rejected new value under
    /// [`KeepFirst`](DuplicatePolicy::KeepFirst), `None` for a new key.
    ///
    /// # Errors
    ///
    /// [`TrieError::DuplicateKey`] if the key is already present under
    /// [`DuplicatePolicy::Reject`], and [`TrieError::CapacityExceeded`] if the
    /// key could push the node count past the `u32` index space. On error
    /// the builder is left unchanged.
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Result<Option<V>> {
        let key = key.as_ref();

        if self.arena.len().saturating_add(key.len()) > MAX_NODES {
            return Err(TrieError::CapacityExceeded {
                nodes: self.arena.len(),
            });
        }

        let mut curr = ROOT;
        for (depth, &byte) in key.iter().enumerate() {
            match self.arena[curr as usize].get_child(byte) {
                Some(child) => curr = child,
                None => {
                    // Nothing below here exists yet: lay down the rest of the path.
                    for &byte in &key[depth..] {
                        let child = self.alloc_node();
                        self.arena[curr as usize].add_child(byte, child);
                        curr = child;
                    }
                    break;
                }
            }
        }

        let slot = &mut self.arena[curr as usize].value;
        match (slot.is_some(), self.policy) {
            (false, _) => {
                *slot = Some(value);
                self.len += 1;
                Ok(None)
            }
            (true, DuplicatePolicy::LastWins) => {
                trace_event!(key = ?String::from_utf8_lossy(key), "duplicate key overwritten");
                Ok(slot.replace(value))
            }
            (true, DuplicatePolicy::KeepFirst) => {
                trace_event!(key = ?String::from_utf8_lossy(key), "duplicate key ignored");
                Ok(Some(value))
            }
            (true, DuplicatePolicy::Reject) => {
                trace_event!(key = ?String::from_utf8_lossy(key), "duplicate key rejected");
                Err(TrieError::DuplicateKey { key: key.to_vec() })
            }
        }
    }

    /// Inserts every entry of `entries`, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`insert`](Self::insert); entries
    /// before it stay inserted.
    pub fn try_extend<I, K>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
    {
        for (key, value) in entries {
            self.insert(key, value)?;
        }
        Ok(())
    }
}
