//! Associative storage keyed by *unordered* pairs of elements.
//!
//! An undirected graph edge `{A, B}` has no first or second endpoint, so a
//! plain `HashMap<(T, T), V>` is the wrong shape for edge data: `(A, B)` and
//! `(B, A)` would land in different slots, and a lookup with the endpoints
//! reversed would silently miss. [`SymmetricMap`] fixes the shape by
//! canonicalizing every key into a sorted [`UnorderedPair`] at construction,
//! which makes hashing and equality order-independent by construction rather
//! than by caller discipline.

pub mod pair;
pub mod symmetric_map;

pub use crate::pair::UnorderedPair;
pub use crate::symmetric_map::SymmetricMap;
