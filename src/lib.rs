//! map-query: uniform, read-only query helpers over associative
//! key -> value containers.
//!
//! Summary
//! - Goal: give every map-like container the same presence/retrieval
//!   surface regardless of how its native `get` is spelled.
//! - One trait, [`MapQuery`], with a single required method: `lookup`,
//!   the container's borrowed read. Everything else is derived from it:
//!   - `try_get_value`: output-parameter convention; writes the caller's
//!     slot on a hit, leaves it untouched on a miss.
//!   - `get_or_default` / `get_or_else`: copy-out with an eager or lazy
//!     fallback value.
//!   - `contains`: presence only, no retrieval.
//!   - `get_cloned`: the `Option<V>` variant, preferred where a single
//!     return value reads better than a bool-plus-out-parameter pair.
//!
//! Constraints
//! - Read-only: no operation mutates the container. Implementations
//!   delegate to the container's own lookup and add no policy of their
//!   own; hashing, probing, ordering, and resizing stay in the container.
//! - Total: key absence is an expected outcome carried by the return
//!   convention. Nothing panics, nothing returns an error.
//! - Stateless: the crate owns no container and holds nothing between
//!   calls. Thread safety is whatever the underlying container offers;
//!   callers mixing concurrent reads with mutation elsewhere bring their
//!   own synchronization.
//!
//! Implementations cover `std`'s `HashMap` and `BTreeMap`, `hashbrown`'s
//! `HashMap`, and `slotmap`'s `SlotMap` and `SecondaryMap`.
//!
//! Notes and non-goals
//! - No mutation helpers: there is no entry-style get-or-insert here.
//! - Keys are passed as `&Self::Key` rather than through a `Borrow<Q>`
//!   parameter so the one signature also covers containers without
//!   borrowed lookup (slot maps take their `Copy` keys by value).
//! - The copying operations require `Value: Clone`; `lookup` is public
//!   surface for callers that want the zero-copy borrowed path.

mod impls;
mod map_query;
mod map_query_proptest;

// Public surface
pub use map_query::MapQuery;
