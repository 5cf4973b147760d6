//! MapQuery: the query trait and its derived operations.

/// Read-only query operations over an associative key -> value container.
///
/// Implementors supply [`lookup`](MapQuery::lookup), the container's native
/// borrowed read; every other operation is derived from it and inherits its
/// guarantees: the container is never mutated, nothing panics, and key
/// absence is reported through the return value rather than an error.
///
/// The copying operations require `Value: Clone` so the container keeps
/// ownership of its entries. Callers that want the zero-copy path call
/// `lookup` directly.
pub trait MapQuery {
    /// Key type the container is indexed by.
    type Key;
    /// Value type stored against each key.
    type Value;

    /// Borrow the value stored for `key`, if any.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Copy the value for `key` into `out` and return `true`; on a miss,
    /// leave `out` untouched and return `false`.
    ///
    /// Output-parameter convention for call sites that hold a reusable
    /// slot; `out`'s existing allocation is reused via
    /// [`Clone::clone_from`].
    fn try_get_value(&self, key: &Self::Key, out: &mut Self::Value) -> bool
    where
        Self::Value: Clone,
    {
        match self.lookup(key) {
            Some(v) => {
                out.clone_from(v);
                true
            }
            None => false,
        }
    }

    /// A copy of the value stored for `key`, or `default` when absent.
    fn get_or_default(&self, key: &Self::Key, default: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        match self.lookup(key) {
            Some(v) => v.clone(),
            None => default,
        }
    }

    /// A copy of the value stored for `key`, or `default()` when absent.
    /// The closure runs only on a miss.
    fn get_or_else<F>(&self, key: &Self::Key, default: F) -> Self::Value
    where
        Self::Value: Clone,
        F: FnOnce() -> Self::Value,
    {
        match self.lookup(key) {
            Some(v) => v.clone(),
            None => default(),
        }
    }

    /// Whether `key` is present. Retrieves no value.
    fn contains(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }

    /// A copy of the value stored for `key`, or `None` when absent.
    ///
    /// Semantically equivalent to [`try_get_value`](MapQuery::try_get_value)
    /// without the pre-declared mutable slot.
    fn get_cloned(&self, key: &Self::Key) -> Option<Self::Value>
    where
        Self::Value: Clone,
    {
        self.lookup(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::MapQuery;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn sample() -> HashMap<String, i32> {
        let mut m = HashMap::new();
        m.insert("a".to_string(), 1);
        m.insert("b".to_string(), 2);
        m
    }

    #[test]
    fn derived_ops_agree_with_lookup() {
        let m = sample();
        for key in ["a", "b", "z"] {
            let key = key.to_string();
            let expected = m.lookup(&key).copied();
            assert_eq!(m.contains(&key), expected.is_some());
            assert_eq!(m.get_cloned(&key), expected);
            assert_eq!(m.get_or_default(&key, -1), expected.unwrap_or(-1));
        }
    }

    #[test]
    fn try_get_value_leaves_out_untouched_on_miss() {
        let m = sample();
        let mut out = 99;
        assert!(!m.try_get_value(&"z".to_string(), &mut out));
        assert_eq!(out, 99);
        assert!(m.try_get_value(&"a".to_string(), &mut out));
        assert_eq!(out, 1);
    }

    #[test]
    fn get_or_else_is_lazy_on_hit() {
        let m = sample();
        let calls = Cell::new(0);
        let v = m.get_or_else(&"b".to_string(), || {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(v, 2);
        assert_eq!(calls.get(), 0);

        let v = m.get_or_else(&"z".to_string(), || {
            calls.set(calls.get() + 1);
            7
        });
        assert_eq!(v, 7);
        assert_eq!(calls.get(), 1);
    }
}
