//! The read-only query side of the trie.

use core::fmt;
use core::ops::ControlFlow;

use crate::config::DuplicatePolicy;
use crate::error::{Result, TrieError};

use super::builder::TrieBuilder;
use super::iter::{Cursor, Keys, PrefixIter, Values};
use super::node::{Node, ROOT};

/// An immutable prefix trie mapping byte-string keys to values.
///
/// The trie is built once, either through [`TrieBuilder`] or one of the
/// constructors below, and is read-only afterwards. Lookups walk one byte at
/// a time over a compact breadth-first node table and never allocate.
/// Enumeration is lazy and in lexicographic byte order.
///
/// Since nothing is mutated after construction, a `&Trie<V>` can be shared
/// across threads whenever `V: Sync`.
///
/// ```
/// use triekit::Trie;
///
/// let trie = Trie::from_keys(["and", "ant", "dad", "do", "dot"]);
///
/// assert!(trie.contains("dad"));
/// assert!(!trie.contains("don't"));
/// assert_eq!(trie.get("do"), Some(&"do"));
/// assert!(trie.prefix_contains("da"));
///
/// let keys: Vec<Vec<u8>> = trie.prefix_search("d").map(|(k, _)| k).collect();
/// assert_eq!(keys, [b"dad".to_vec(), b"do".to_vec(), b"dot".to_vec()]);
/// ```
#[derive(Clone)]
pub struct Trie<V> {
    /// Node table in breadth-first order; the root is at index 0.
    nodes: Box<[Node]>,
    /// `labels[n]` is the edge byte leading into node `n`.
    labels: Box<[u8]>,
    /// Values in lexicographic key order.
    values: Box<[V]>,
}

impl<V> Trie<V> {
    pub(crate) fn from_parts(nodes: Box<[Node]>, labels: Box<[u8]>, values: Box<[V]>) -> Self {
        debug_assert_eq!(nodes.len(), labels.len());
        debug_assert!(!nodes.is_empty());
        Self {
            nodes,
            labels,
            values,
        }
    }

    /// Creates a trie with no keys.
    pub fn empty() -> Self {
        TrieBuilder::new().build()
    }

    /// Returns a builder for incremental construction.
    pub fn builder() -> TrieBuilder<V> {
        TrieBuilder::new()
    }

    /// Builds a trie from `(key, value)` entries; a repeated key keeps its
    /// last value.
    ///
    /// # Panics
    ///
    /// Panics if the keys need more than `u32::MAX` nodes.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
    {
        Self::try_new(entries, DuplicatePolicy::LastWins).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Builds a trie from `(key, value)` entries under the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::DuplicateKey`] for a repeated key under
    /// [`DuplicatePolicy::Reject`], or [`TrieError::CapacityExceeded`].
    pub fn try_new<I, K>(entries: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
    {
        let mut builder = TrieBuilder::new().duplicate_policy(policy);
        builder.try_extend(entries)?;
        Ok(builder.build())
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn node(&self, id: u32) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline]
    pub(crate) fn label(&self, id: usize) -> u8 {
        self.labels[id]
    }

    #[inline]
    pub(crate) fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Follows the edge labelled `byte` out of `id`.
    #[inline]
    fn child(&self, id: u32, byte: u8) -> Option<u32> {
        let node = self.node(id);
        if node.is_dense() {
            return Some(node.first_child + u32::from(byte));
        }
        let range = node.children();
        let start = range.start;
        self.labels[range]
            .binary_search(&byte)
            .ok()
            .map(|offset| (start + offset) as u32)
    }

    /// Walks `key` from the root, returning the node it reaches.
    #[inline]
    fn walk(&self, key: &[u8]) -> Option<u32> {
        key.iter().try_fold(ROOT, |id, &byte| self.child(id, byte))
    }

    /// Returns true if `key` is one of the keys.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value bound to `key`, or `None` if `key` is not a
    /// complete key (it may still be a prefix of other keys).
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        let id = self.walk(key.as_ref())?;
        self.node(id).value_index().map(|index| &self.values[index])
    }

    /// Like [`get`](Self::get), reporting a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::NotFound`] if `key` is not a complete key.
    pub fn try_get<K: AsRef<[u8]>>(&self, key: K) -> Result<&V> {
        let key = key.as_ref();
        self.get(key)
            .ok_or_else(|| TrieError::NotFound { key: key.to_vec() })
    }

    /// Returns true if at least one key starts with `prefix`, the prefix
    /// itself included.
    pub fn prefix_contains<K: AsRef<[u8]>>(&self, prefix: K) -> bool {
        // Every node except an empty root has a key at or below it.
        !self.is_empty() && self.walk(prefix.as_ref()).is_some()
    }

    /// Alias of [`prefix_contains`](Self::prefix_contains).
    pub fn starts_with<K: AsRef<[u8]>>(&self, prefix: K) -> bool {
        self.prefix_contains(prefix)
    }

    /// Returns every key starting with `prefix`, with its value, in
    /// lexicographic order. If `prefix` is itself a key it comes first.
    pub fn prefix_search<K: AsRef<[u8]>>(&self, prefix: K) -> PrefixIter<'_, V> {
        let prefix = prefix.as_ref();
        PrefixIter::new(self, self.walk(prefix), prefix)
    }

    /// Returns every key with its value, in lexicographic order.
    pub fn iter(&self) -> PrefixIter<'_, V> {
        PrefixIter::new(self, Some(ROOT), &[])
    }

    /// Returns every key in lexicographic order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Returns every value, ordered by key.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.values.iter())
    }

    /// Calls `f` with every key and value in lexicographic order, reusing one
    /// key buffer. Stops as soon as `f` breaks.
    pub fn for_each<B, F>(&self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&[u8], &V) -> ControlFlow<B>,
    {
        self.for_each_prefix(b"", f)
    }

    /// Calls `f` with every key starting with `prefix`, in lexicographic
    /// order. Stops as soon as `f` breaks.
    pub fn for_each_prefix<K, B, F>(&self, prefix: K, mut f: F) -> ControlFlow<B>
    where
        K: AsRef<[u8]>,
        F: FnMut(&[u8], &V) -> ControlFlow<B>,
    {
        let prefix = prefix.as_ref();
        let mut cursor = Cursor::new(self.walk(prefix), prefix);
        while let Some(index) = cursor.advance(self) {
            if let ControlFlow::Break(b) = f(cursor.key(), &self.values[index]) {
                return ControlFlow::Break(b);
            }
        }
        ControlFlow::Continue(())
    }

    /// Finds the longest key that is a prefix of `query`.
    ///
    /// Returns the key length in bytes and its value.
    ///
    /// ```
    /// use triekit::Trie;
    ///
    /// let trie = Trie::new([("do", 1), ("dot", 2)]);
    /// assert_eq!(trie.longest_prefix_match("dotted"), Some((3, &2)));
    /// assert_eq!(trie.longest_prefix_match("dog"), Some((2, &1)));
    /// assert_eq!(trie.longest_prefix_match("d"), None);
    /// ```
    pub fn longest_prefix_match<K: AsRef<[u8]>>(&self, query: K) -> Option<(usize, &V)> {
        let query = query.as_ref();
        let mut id = ROOT;
        let mut best = self.node(ROOT).value_index().map(|index| (0, index));
        for (depth, &byte) in query.iter().enumerate() {
            match self.child(id, byte) {
                Some(child) => id = child,
                None => break,
            }
            if let Some(index) = self.node(id).value_index() {
                best = Some((depth + 1, index));
            }
        }
        best.map(|(len, index)| (len, &self.values[index]))
    }
}

impl<K> Trie<K>
where
    K: AsRef<[u8]> + Clone,
{
    /// Builds a trie whose value for each key is the key itself.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::new(keys.into_iter().map(|key| (key.clone(), key)))
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Trie<V>
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = PrefixIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let _ = self.for_each(|key, value| {
            map.entry(&String::from_utf8_lossy(key), value);
            ControlFlow::<()>::Continue(())
        });
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie<&'static str> {
        Trie::from_keys(["and", "ant", "dad", "do", "dot"])
    }

    #[test]
    fn test_trie_basic() {
        let trie = sample();

        assert_eq!(trie.len(), 5);
        assert!(trie.contains("dad"));
        assert!(!trie.contains("don't"));
        assert!(!trie.contains("an"));
        assert_eq!(trie.get("do"), Some(&"do"));
        assert_eq!(trie.get("d"), None);
        assert_eq!(trie.get(""), None);
    }

    #[test]
    fn test_trie_try_get() {
        let trie = sample();
        assert_eq!(trie.try_get("ant"), Ok(&"ant"));
        assert_eq!(
            trie.try_get("an"),
            Err(TrieError::NotFound { key: b"an".to_vec() })
        );
    }

    #[test]
    fn test_trie_prefix_contains() {
        let trie = sample();
        assert!(trie.prefix_contains("da"));
        assert!(trie.prefix_contains("do"));
        assert!(trie.prefix_contains(""));
        assert!(!trie.prefix_contains("z"));
        assert!(!trie.prefix_contains("dots"));
        assert!(trie.starts_with("an"));
    }

    #[test]
    fn test_trie_empty() {
        let trie: Trie<u8> = Trie::empty();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains(""));
        assert!(!trie.prefix_contains(""));
        assert_eq!(trie.iter().count(), 0);
        assert_eq!(trie.longest_prefix_match("abc"), None);
    }

    #[test]
    fn test_trie_dense_node() {
        let trie: Trie<u8> = (0..=255u8).map(|b| ([b], b)).collect();
        assert_eq!(trie.len(), 256);
        for b in 0..=255u8 {
            assert_eq!(trie.get([b]), Some(&b));
        }
        assert!(!trie.contains([7u8, 7]));
    }

    #[test]
    fn test_trie_for_each_stops_early() {
        let trie = sample();
        let mut seen = Vec::new();
        let flow = trie.for_each(|key, _| {
            seen.push(key.to_vec());
            if key == b"dad" {
                ControlFlow::Break(key.len())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(3));
        assert_eq!(seen, [b"and".to_vec(), b"ant".to_vec(), b"dad".to_vec()]);
    }

    #[test]
    fn test_trie_for_each_prefix() {
        let trie = sample();
        let mut seen = Vec::new();
        let _ = trie.for_each_prefix("do", |key, value| {
            seen.push((key.to_vec(), *value));
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(seen, [(b"do".to_vec(), "do"), (b"dot".to_vec(), "dot")]);
    }

    #[test]
    fn test_trie_longest_prefix_match_with_empty_key() {
        let trie = Trie::new([("", 0), ("a", 1)]);
        assert_eq!(trie.longest_prefix_match("b"), Some((0, &0)));
        assert_eq!(trie.longest_prefix_match("ab"), Some((1, &1)));
    }

    #[test]
    fn test_trie_debug() {
        let trie = Trie::new([("b", 2), ("a", 1)]);
        assert_eq!(format!("{trie:?}"), r#"{"a": 1, "b": 2}"#);
    }
}
