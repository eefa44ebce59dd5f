use serde::{Deserialize, Serialize};

/// An unordered pair of elements: `UnorderedPair::new(a, b)` and
/// `UnorderedPair::new(b, a)` are the same key.
///
/// The elements are stored in canonical `(min, max)` order, fixed at
/// construction, so the derived equality and hash operate on the same sorted
/// tuple and cannot disagree about which pairs are equal. Serialized form is
/// the canonical tuple, and deserialization re-canonicalizes, so a hand-edited
/// document with reversed elements still produces a valid key.
///
/// Precondition: `T`'s `Ord` must be consistent with its `Eq`. If they
/// disagree, lookups may silently miss; the container does not detect this.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(
    from = "(T, T)",
    into = "(T, T)",
    bound(
        serialize = "T: Clone + Serialize",
        deserialize = "T: Ord + Deserialize<'de>"
    )
)]
pub struct UnorderedPair<T> {
    lo: T,
    hi: T,
}

impl<T: Ord> UnorderedPair<T> {
    /// A self-loop pair `(a, a)` is valid and canonicalizes to itself.
    pub fn new(a: T, b: T) -> Self {
        if a > b {
            UnorderedPair { lo: b, hi: a }
        } else {
            UnorderedPair { lo: a, hi: b }
        }
    }
}

impl<T> UnorderedPair<T> {
    /// The smaller element.
    pub fn lo(&self) -> &T {
        &self.lo
    }

    /// The larger element (equal to `lo` for a self-loop).
    pub fn hi(&self) -> &T {
        &self.hi
    }

    pub fn into_tuple(self) -> (T, T) {
        (self.lo, self.hi)
    }
}

impl<T: Ord> From<(T, T)> for UnorderedPair<T> {
    fn from((a, b): (T, T)) -> Self {
        UnorderedPair::new(a, b)
    }
}

impl<T> From<UnorderedPair<T>> for (T, T) {
    fn from(pair: UnorderedPair<T>) -> (T, T) {
        (pair.lo, pair.hi)
    }
}
