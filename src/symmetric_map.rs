use crate::pair::UnorderedPair;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Index;

/// A map keyed by unordered pairs of `T`: `(a, b)` and `(b, a)` address the
/// same entry. Useful for data attached to undirected graph edges, e.g.
/// weights keyed by the edge's two endpoints.
///
/// Keys are canonicalized once on the way in (see [`UnorderedPair`]), so the
/// underlying table only ever sees sorted tuples and ordinary hashing and
/// equality apply. Lookups take elements by value because the canonical key
/// must be built from them; `T` is expected to be cheap to copy or clone
/// (indices, chars, small ids).
///
/// All operations are amortized O(1). The map provides no internal
/// synchronization; shared access requires an external lock.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(bound(
    serialize = "T: Clone + Serialize, V: Serialize",
    deserialize = "T: Ord + Hash + Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct SymmetricMap<T, V> {
    map: FnvHashMap<UnorderedPair<T>, V>,
}

impl<T, V> SymmetricMap<T, V> {
    pub fn new() -> Self {
        SymmetricMap {
            map: FnvHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SymmetricMap {
            map: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// The number of distinct unordered pairs stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Visits entries in arbitrary order. Keys come back in canonical form.
    pub fn iter(&self) -> hash_map::Iter<UnorderedPair<T>, V> {
        self.map.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<UnorderedPair<T>, V> {
        self.map.iter_mut()
    }
}

impl<T: Eq + Hash + Ord, V> SymmetricMap<T, V> {
    /// Stores `value` for the unordered pair `{a, b}`, overwriting any value
    /// previously inserted under either ordering. Returns the replaced value
    /// if there was one.
    pub fn insert(&mut self, a: T, b: T, value: V) -> Option<V> {
        self.map.insert(UnorderedPair::new(a, b), value)
    }

    /// Pure read: never creates an entry. See `get_or_insert_default` for the
    /// create-on-read variant.
    pub fn get(&self, a: T, b: T) -> Option<&V> {
        self.map.get(&UnorderedPair::new(a, b))
    }

    pub fn get_mut(&mut self, a: T, b: T) -> Option<&mut V> {
        self.map.get_mut(&UnorderedPair::new(a, b))
    }

    pub fn contains(&self, a: T, b: T) -> bool {
        self.map.contains_key(&UnorderedPair::new(a, b))
    }

    /// Removes the entry for `{a, b}` under either ordering. Returns the
    /// removed value, or `None` if the pair was absent.
    pub fn remove(&mut self, a: T, b: T) -> Option<V> {
        self.map.remove(&UnorderedPair::new(a, b))
    }
}

impl<T: Eq + Hash + Ord, V: Default> SymmetricMap<T, V> {
    /// Returns the entry for `{a, b}`, first inserting `V::default()` if the
    /// pair is absent. This is the only read that creates entries; `get` and
    /// indexing never do.
    pub fn get_or_insert_default(&mut self, a: T, b: T) -> &mut V {
        let key = UnorderedPair::new(a, b);
        if !self.map.contains_key(&key) {
            log::trace!("Inserting default value for absent pair");
        }

        self.map.entry(key).or_default()
    }
}

impl<T: Eq + Hash + Ord, V> Index<(T, T)> for SymmetricMap<T, V> {
    type Output = V;

    /// Read-only lookup of `map[(a, b)]`.
    ///
    /// # Panics
    ///
    /// Panics if the pair has no entry. Indexing never auto-creates; use
    /// `get_or_insert_default` for that.
    fn index(&self, (a, b): (T, T)) -> &V {
        &self.map[&UnorderedPair::new(a, b)]
    }
}

impl<T: Eq + Hash + Ord, V> Extend<((T, T), V)> for SymmetricMap<T, V> {
    /// Later duplicates of the same unordered pair overwrite earlier ones.
    fn extend<I: IntoIterator<Item = ((T, T), V)>>(&mut self, iter: I) {
        self.map.extend(
            iter.into_iter()
                .map(|((a, b), value)| (UnorderedPair::new(a, b), value)),
        )
    }
}

impl<T: Eq + Hash + Ord, V> FromIterator<((T, T), V)> for SymmetricMap<T, V> {
    fn from_iter<I: IntoIterator<Item = ((T, T), V)>>(iter: I) -> Self {
        let mut map = SymmetricMap::new();
        map.extend(iter);

        map
    }
}

impl<T, V> IntoIterator for SymmetricMap<T, V> {
    type Item = (UnorderedPair<T>, V);
    type IntoIter = hash_map::IntoIter<UnorderedPair<T>, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a SymmetricMap<T, V> {
    type Item = (&'a UnorderedPair<T>, &'a V);
    type IntoIter = hash_map::Iter<'a, UnorderedPair<T>, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<'a, T, V> IntoIterator for &'a mut SymmetricMap<T, V> {
    type Item = (&'a UnorderedPair<T>, &'a mut V);
    type IntoIter = hash_map::IterMut<'a, UnorderedPair<T>, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter_mut()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_is_symmetric() {
        let mut map = SymmetricMap::new();
        map.insert(1, 2, "w");

        assert_eq!(map.get(1, 2), Some(&"w"));
        assert_eq!(map.get(2, 1), Some(&"w"));
    }

    #[test]
    fn self_loop_is_a_valid_key() {
        let mut map = SymmetricMap::new();
        map.insert(7, 7, 3.5);

        assert_eq!(map.get(7, 7), Some(&3.5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn reversed_insert_overwrites_the_same_slot() {
        let mut map = SymmetricMap::new();

        assert_eq!(map.insert('a', 'b', 1), None);
        assert_eq!(map.insert('b', 'a', 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get('a', 'b'), Some(&2));
    }

    #[test]
    fn remove_works_under_either_ordering() {
        let mut map = SymmetricMap::new();
        map.insert(1, 2, ());

        assert_eq!(map.remove(2, 1), Some(()));
        assert_eq!(map.get(1, 2), None);
        assert_eq!(map.get(2, 1), None);
        assert!(map.is_empty());

        // Removing an absent pair is not an error.
        assert_eq!(map.remove(2, 1), None);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn pairs_sharing_an_element_are_distinct_keys() {
        let mut map = SymmetricMap::new();
        map.insert('a', 'b', 1);
        map.insert('a', 'c', 2);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get('b', 'a'), Some(&1));
        assert_eq!(map.get('c', 'a'), Some(&2));
    }

    #[test]
    fn edge_weight_lookup_scenario() {
        let mut weights = SymmetricMap::new();
        weights.insert('A', 'C', 2);
        weights.insert('A', 'B', 6);
        weights.insert('E', 'C', 7);
        weights.insert('D', 'C', 1);

        assert_eq!(weights.len(), 4);
        assert_eq!(weights.get('C', 'A'), Some(&2));
        assert_eq!(weights[('C', 'A')], 2);
    }

    #[test]
    fn get_never_creates_entries() {
        let mut map: SymmetricMap<u32, u32> = SymmetricMap::new();

        assert_eq!(map.get(1, 2), None);
        assert!(map.is_empty());

        *map.get_or_insert_default(1, 2) += 5;
        assert_eq!(map.get(2, 1), Some(&5));
        assert_eq!(map.len(), 1);

        // A second create-on-read finds the existing entry.
        *map.get_or_insert_default(2, 1) += 1;
        assert_eq!(map.get(1, 2), Some(&6));
        assert_eq!(map.len(), 1);
    }

    #[test]
    #[should_panic]
    fn indexing_an_absent_pair_panics() {
        let map: SymmetricMap<u32, u32> = SymmetricMap::new();
        let _ = map[(1, 2)];
    }

    #[test]
    fn collects_from_tuple_keys() {
        let map: SymmetricMap<u8, i32> = vec![((2, 1), 10), ((1, 2), 20), ((3, 1), 30)]
            .into_iter()
            .collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1, 2), Some(&20));
        assert_eq!(map.get(1, 3), Some(&30));
    }

    #[test]
    fn iteration_yields_canonical_keys() {
        let mut map = SymmetricMap::new();
        map.insert(4u32, 2, "a");
        map.insert(9, 9, "b");

        let mut keys: Vec<(u32, u32)> = map.iter().map(|(k, _)| (*k.lo(), *k.hi())).collect();
        keys.sort();

        assert_eq!(keys, vec![(2, 4), (9, 9)]);
    }

    #[test]
    fn serde_round_trip_preserves_symmetry() {
        let mut map = SymmetricMap::new();
        map.insert(3u8, 1, -1i32);
        map.insert(2, 2, 7);

        let text = ron::ser::to_string(&map).unwrap();
        let copy: SymmetricMap<u8, i32> = ron::de::from_str(&text).unwrap();

        assert_eq!(copy.len(), 2);
        assert_eq!(copy.get(1, 3), Some(&-1));
        assert_eq!(copy.get(2, 2), Some(&7));
    }
}
