use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::bisect;
use crate::collections::associative::{IntoIter, Iter, Keys, Pair};
use crate::collections::contiguous::Vector;
use crate::collections::traits::Container;
use crate::util::error::{EmptyCollection, InvalidCapacity};

/// A map which keeps its keys in ascending order, finding them by bisection.
///
/// # Examples
/// ```
/// # use adt_collections::collections::sorted::SortedArrayMap;
/// let mut map = SortedArrayMap::new();
/// map.put("pear", 3);
/// map.put("apple", 1);
/// assert_eq!(map.put("pear", 4), Some(3));
/// assert!(map.sorted_keys().eq(&["apple", "pear"]));
/// assert_eq!(map.get("pear"), Some(&4));
/// ```
pub struct SortedArrayMap<K, V> {
    pub(crate) pairs: Vector<Pair<K, V>>,
}

impl<K: Ord, V> SortedArrayMap<K, V> {
    /// Creates an empty map. Memory is allocated on the first insertion.
    pub fn new() -> SortedArrayMap<K, V> {
        SortedArrayMap {
            pairs: Vector::new(),
        }
    }

    /// Creates an empty map with room for `cap` entries, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<SortedArrayMap<K, V>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(SortedArrayMap {
            pairs: Vector::with_cap(cap),
        })
    }

    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        bisect(&self.pairs, |pair| Borrow::<Q>::borrow(&pair.key).cmp(key))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.search(key).ok()?;
        Some(&self.pairs[index].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.search(key).ok()?;
        Some(&mut self.pairs[index].value)
    }

    /// Associates `value` with `key`, returning the value it replaced, if any. A new key is
    /// inserted at its sorted position.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(index) => Some(mem::replace(&mut self.pairs[index].value, value)),
            Err(index) => {
                self.pairs.insert(index, Pair::new(key, value));
                None
            },
        }
    }

    /// Removes `key` from the map, returning its value if it was present. Later entries shift left
    /// to keep the map sorted.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the map has no entries at all.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, EmptyCollection>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(self.search(key).ok().map(|index| self.pairs.remove(index).value))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_ok()
    }

    /// Returns an iterator over the keys of the map in ascending order.
    pub fn sorted_keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the keys of the map. Equivalent to
    /// [`sorted_keys`](SortedArrayMap::sorted_keys).
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.sorted_keys()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.pairs.first().map(|pair| (&pair.key, &pair.value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.pairs.last().map(|pair| (&pair.key, &pair.value))
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K, V> Container for SortedArrayMap<K, V> {
    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn make_empty(&mut self) {
        self.pairs.clear();
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedArrayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SortedArrayMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for SortedArrayMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedArrayMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl<K: Ord, V> Default for SortedArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for SortedArrayMap<K, V> {
    fn clone(&self) -> Self {
        SortedArrayMap {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for SortedArrayMap<K, V> {
    /// Both maps are sorted, so equal maps store their entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<K: Eq, V: Eq> Eq for SortedArrayMap<K, V> {}

impl<K: Debug, V: Debug> Debug for SortedArrayMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value))).finish()
    }
}
