//! Lazy iterators over a [`Trie`](super::Trie).

use core::iter::FusedIterator;
use core::slice;

use super::map::Trie;

/// Depth-first walk state shared by [`PrefixIter`] and
/// [`Trie::for_each_prefix`].
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    // Stack of (node_id, action). Action 0 yields the node's value,
    // action i descends into child i - 1.
    stack: Vec<(u32, u16)>,
    // Key of the node on top of the stack.
    key: Vec<u8>,
}

impl Cursor {
    /// Starts at `start` (the node reached by `prefix`), or nowhere if the
    /// prefix walk failed.
    pub fn new(start: Option<u32>, prefix: &[u8]) -> Self {
        match start {
            Some(id) => Self {
                stack: vec![(id, 0)],
                key: prefix.to_vec(),
            },
            None => Self {
                stack: Vec::new(),
                key: Vec::new(),
            },
        }
    }

    /// Key of the entry last returned by [`advance`](Self::advance).
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Moves to the next terminal node in byte order and returns its value
    /// index.
    pub fn advance<V>(&mut self, trie: &Trie<V>) -> Option<usize> {
        loop {
            let top = self.stack.len().checked_sub(1)?;
            let (id, action) = self.stack[top];
            let node = trie.node(id);

            if action == 0 {
                self.stack[top].1 = 1;
                if let Some(index) = node.value_index() {
                    return Some(index);
                }
                continue;
            }

            let child = usize::from(action - 1);
            if child < usize::from(node.child_count) {
                self.stack[top].1 += 1;
                let child_id = node.first_child as usize + child;
                self.key.push(trie.label(child_id));
                self.stack.push((child_id as u32, 0));
            } else {
                self.stack.pop();
                // The start node's prefix belongs to the caller.
                if !self.stack.is_empty() {
                    self.key.pop();
                }
            }
        }
    }
}

/// Lazy, ordered iterator over the entries below a prefix.
///
/// Created by [`Trie::prefix_search`] and [`Trie::iter`]. Yields
/// `(Vec<u8>, &V)`; each key is a fresh copy of the walk buffer.
pub struct PrefixIter<'a, V> {
    trie: &'a Trie<V>,
    cursor: Cursor,
}

impl<'a, V> PrefixIter<'a, V> {
    pub(crate) fn new(trie: &'a Trie<V>, start: Option<u32>, prefix: &[u8]) -> Self {
        Self {
            trie,
            cursor: Cursor::new(start, prefix),
        }
    }
}

impl<'a, V> Iterator for PrefixIter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.advance(self.trie)?;
        Some((self.cursor.key().to_vec(), self.trie.value_at(index)))
    }
}

impl<V> FusedIterator for PrefixIter<'_, V> {}

impl<V> Clone for PrefixIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie,
            cursor: self.cursor.clone(),
        }
    }
}

/// Ordered iterator over the keys of a [`Trie`].
pub struct Keys<'a, V> {
    inner: PrefixIter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: PrefixIter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

/// Iterator over the values of a [`Trie`], ordered by key.
pub struct Values<'a, V> {
    inner: slice::Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: slice::Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::Trie;

    fn collect<'a>(iter: impl Iterator<Item = (Vec<u8>, &'a &'static str)>) -> Vec<(String, &'static str)> {
        iter.map(|(k, v)| (String::from_utf8(k).unwrap(), *v)).collect()
    }

    #[test]
    fn test_iter_is_ordered() {
        let trie = Trie::from_keys(["dot", "ant", "do", "dad", "and"]);
        assert_eq!(
            collect(trie.iter()),
            [
                ("and".to_string(), "and"),
                ("ant".to_string(), "ant"),
                ("dad".to_string(), "dad"),
                ("do".to_string(), "do"),
                ("dot".to_string(), "dot"),
            ]
        );
    }

    #[test]
    fn test_prefix_search_prefix_first() {
        let trie = Trie::from_keys(["do", "dot", "dog", "dad"]);
        let keys: Vec<String> = collect(trie.prefix_search("do")).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["do", "dog", "dot"]);
    }

    #[test]
    fn test_prefix_search_missing_prefix() {
        let trie = Trie::from_keys(["do", "dot"]);
        assert_eq!(trie.prefix_search("x").count(), 0);
        assert_eq!(trie.prefix_search("dots").count(), 0);
    }

    #[test]
    fn test_iter_is_fused_and_fresh() {
        let trie = Trie::from_keys(["a", "b"]);
        let mut iter = trie.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(trie.iter().count(), 2);
    }

    #[test]
    fn test_iter_clone_resumes_independently() {
        let trie = Trie::from_keys(["a", "b", "c"]);
        let mut iter = trie.iter();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(rest.map(|(k, _)| k).collect::<Vec<_>>(), [b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_keys_and_values() {
        let trie = Trie::new([("b", 2), ("a", 1), ("ab", 3)]);
        assert_eq!(
            trie.keys().collect::<Vec<_>>(),
            [b"a".to_vec(), b"ab".to_vec(), b"b".to_vec()]
        );
        let values = trie.values();
        assert_eq!(values.len(), 3);
        assert_eq!(values.rev().copied().collect::<Vec<_>>(), [2, 3, 1]);
    }
}
