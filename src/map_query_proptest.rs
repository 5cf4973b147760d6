#![cfg(test)]

// Property tests for MapQuery kept inside the crate so one generated entry
// set can be loaded into every supported container and the impls checked
// against each other.
//
// Property: for arbitrary entries and probe keys, all hash/tree containers
// holding the same entries answer every query operation identically, and
// each answer matches the std::HashMap model.

use crate::map_query::MapQuery;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn key(i: usize) -> String {
    format!("k{}", i)
}

proptest! {
    #[test]
    fn prop_containers_agree(
        entries in proptest::collection::vec((0usize..16, -1000i32..1000), 0..32),
        probes in proptest::collection::vec(0usize..24, 1..64),
    ) {
        // Same insertion order everywhere; later duplicates overwrite in
        // all three containers alike.
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut tree: BTreeMap<String, i32> = BTreeMap::new();
        let mut brown: hashbrown::HashMap<String, i32> = hashbrown::HashMap::new();
        for (i, v) in entries {
            model.insert(key(i), v);
            tree.insert(key(i), v);
            brown.insert(key(i), v);
        }

        // Probe indices range past the entry indices so misses occur.
        for p in probes {
            let k = key(p);
            let expected = model.get(&k).copied();

            prop_assert_eq!(model.contains(&k), expected.is_some());
            prop_assert_eq!(tree.contains(&k), expected.is_some());
            prop_assert_eq!(brown.contains(&k), expected.is_some());

            prop_assert_eq!(model.get_cloned(&k), expected);
            prop_assert_eq!(tree.get_cloned(&k), expected);
            prop_assert_eq!(brown.get_cloned(&k), expected);

            let sentinel = i32::MIN;
            prop_assert_eq!(model.get_or_default(&k, sentinel), expected.unwrap_or(sentinel));
            prop_assert_eq!(tree.get_or_default(&k, sentinel), expected.unwrap_or(sentinel));
            prop_assert_eq!(brown.get_or_default(&k, sentinel), expected.unwrap_or(sentinel));
            prop_assert_eq!(tree.get_or_else(&k, || sentinel), expected.unwrap_or(sentinel));

            let mut out = sentinel;
            let hit = tree.try_get_value(&k, &mut out);
            prop_assert_eq!(hit, expected.is_some());
            prop_assert_eq!(out, expected.unwrap_or(sentinel));
        }
    }
}

// Property: slot maps answer through the same trait surface, including for
// keys whose entries have been removed (stale generational keys miss).
proptest! {
    #[test]
    fn prop_slotmap_queries(
        values in proptest::collection::vec(-1000i32..1000, 1..24),
        remove_mask in proptest::collection::vec(any::<bool>(), 1..24),
    ) {
        let mut sm: slotmap::SlotMap<slotmap::DefaultKey, i32> = slotmap::SlotMap::new();
        let mut sec: slotmap::SecondaryMap<slotmap::DefaultKey, i32> = slotmap::SecondaryMap::new();
        let keys: Vec<_> = values.iter().map(|&v| {
            let k = sm.insert(v);
            sec.insert(k, v);
            k
        }).collect();

        let mut expected: Vec<Option<i32>> = values.iter().copied().map(Some).collect();
        for (i, remove) in remove_mask.iter().enumerate().take(keys.len()) {
            if *remove {
                sm.remove(keys[i]);
                sec.remove(keys[i]);
                expected[i] = None;
            }
        }

        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(sm.contains(k), expected[i].is_some());
            prop_assert_eq!(sm.get_cloned(k), expected[i]);
            prop_assert_eq!(sec.get_cloned(k), expected[i]);
            prop_assert_eq!(sm.get_or_default(k, 0), expected[i].unwrap_or(0));
        }
    }
}
