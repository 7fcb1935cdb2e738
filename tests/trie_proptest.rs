use std::collections::BTreeMap;

use proptest::prelude::*;
use triekit::Trie;

fn small_keys() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // A narrow alphabet makes shared prefixes and duplicates likely.
    proptest::collection::vec(proptest::collection::vec(b'a'..=b'd', 0..6), 0..40)
}

proptest! {
    #[test]
    fn test_trie_matches_btree_map(keys in small_keys(), probes in small_keys()) {
        let mut std_map = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            std_map.insert(key.clone(), i);
        }
        let trie = Trie::new(keys.iter().enumerate().map(|(i, k)| (k.clone(), i)));

        prop_assert_eq!(trie.len(), std_map.len());

        let items: Vec<(Vec<u8>, usize)> = trie.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, usize)> = std_map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(items, expected);

        for probe in keys.iter().chain(probes.iter()) {
            prop_assert_eq!(trie.get(probe), std_map.get(probe));
            prop_assert_eq!(trie.contains(probe), std_map.contains_key(probe));

            let has_prefix = std_map.keys().any(|k| k.starts_with(probe));
            prop_assert_eq!(trie.prefix_contains(probe), has_prefix, "prefix {:?}", probe);

            let found: Vec<Vec<u8>> = trie.prefix_search(probe).map(|(k, _)| k).collect();
            let wanted: Vec<Vec<u8>> = std_map.keys().filter(|k| k.starts_with(probe)).cloned().collect();
            prop_assert_eq!(found, wanted);
        }
    }

    #[test]
    fn test_iter_is_strictly_increasing(keys in small_keys()) {
        let trie = Trie::from_keys(keys);
        let listed: Vec<Vec<u8>> = trie.keys().collect();
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_longest_prefix_match_agrees_with_scan(keys in small_keys(), query in proptest::collection::vec(b'a'..=b'd', 0..8)) {
        let trie = Trie::from_keys(keys.clone());
        let expected = keys
            .iter()
            .filter(|k| query.starts_with(k))
            .map(Vec::len)
            .max();
        prop_assert_eq!(trie.longest_prefix_match(&query).map(|(len, _)| len), expected);
    }
}
