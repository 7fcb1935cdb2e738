//! Batch lookups spread over the rayon thread pool.
//!
//! A built trie has no mutable state, so any number of workers can query the
//! same `&Trie` without coordination.

use rayon::prelude::*;

use super::map::Trie;

impl<V: Sync> Trie<V> {
    /// Looks up every key in parallel; results keep the order of `keys`.
    pub fn get_many_par<'a, K>(&'a self, keys: &[K]) -> Vec<Option<&'a V>>
    where
        K: AsRef<[u8]> + Sync,
    {
        keys.par_iter().map(|key| self.get(key)).collect()
    }

    /// Returns true if every key in `keys` is present.
    pub fn contains_all_par<K>(&self, keys: &[K]) -> bool
    where
        K: AsRef<[u8]> + Sync,
    {
        keys.par_iter().all(|key| self.contains(key))
    }

    /// Counts the keys of `keys` that are present.
    pub fn count_present_par<K>(&self, keys: &[K]) -> usize
    where
        K: AsRef<[u8]> + Sync,
    {
        keys.par_iter().filter(|key| self.contains(key)).count()
    }
}
