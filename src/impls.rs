//! MapQuery implementations for the containers in the dependency stack.
//!
//! Each impl delegates `lookup` to the container's own `get`; hashing,
//! probing, and ordering policy stay in the container.

use crate::map_query::MapQuery;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

impl<K, V, S> MapQuery for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> MapQuery for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> MapQuery for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

// Slot maps take their Copy keys by value; the borrowed trait key is
// copied out at the call site.
impl<K, V> MapQuery for slotmap::SlotMap<K, V>
where
    K: slotmap::Key,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(*key)
    }
}

impl<K, V> MapQuery for slotmap::SecondaryMap<K, V>
where
    K: slotmap::Key,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(*key)
    }
}
