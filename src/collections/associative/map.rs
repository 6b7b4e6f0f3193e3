use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{IntoIter, Iter, Keys, Pair, position};
use crate::collections::contiguous::Vector;
use crate::collections::traits::Container;
use crate::util::error::{EmptyCollection, InvalidCapacity};

/// An unsorted map, associating each key with exactly one value.
///
/// Entries are [`Pair`]s in a [`Vector`], found by linear search. Removal swaps the last entry into
/// the gap, so the order of keys isn't preserved.
///
/// # Examples
/// ```
/// # use adt_collections::collections::associative::ArrayMap;
/// let mut map = ArrayMap::new();
/// assert_eq!(map.put(1, "one"), None);
/// assert_eq!(map.put(1, "uno"), Some("one"));
/// assert_eq!(map.get(&1), Some(&"uno"));
/// assert_eq!(map.remove(&1), Ok(Some("uno")));
/// assert!(map.remove(&1).is_err());
/// ```
pub struct ArrayMap<K, V> {
    pub(crate) pairs: Vector<Pair<K, V>>,
}

impl<K: Eq, V> ArrayMap<K, V> {
    /// Creates an empty map. Memory is allocated on the first insertion.
    pub fn new() -> ArrayMap<K, V> {
        ArrayMap {
            pairs: Vector::new(),
        }
    }

    /// Creates an empty map with room for `cap` entries, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<ArrayMap<K, V>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(ArrayMap {
            pairs: Vector::with_cap(cap),
        })
    }

    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = position(&self.pairs, key)?;
        Some(&self.pairs[index].value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = position(&self.pairs, key)?;
        Some(&mut self.pairs[index].value)
    }

    /// Associates `value` with `key`, returning the value it replaced, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match position(&self.pairs, &key) {
            Some(index) => Some(mem::replace(&mut self.pairs[index].value, value)),
            None => {
                self.pairs.push(Pair::new(key, value));
                None
            },
        }
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the map has no entries at all.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, EmptyCollection>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(position(&self.pairs, key).map(|index| self.pairs.swap_remove(index).value))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        position(&self.pairs, key).is_some()
    }

    /// Returns an iterator over the keys of the map, in no particular order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K, V> Container for ArrayMap<K, V> {
    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn make_empty(&mut self) {
        self.pairs.clear();
    }
}

impl<K: Eq, V> Extend<(K, V)> for ArrayMap<K, V> {
    /// Puts every entry, later values replacing earlier ones with the same key.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ArrayMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for ArrayMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl<K: Eq, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for ArrayMap<K, V> {
    fn clone(&self) -> Self {
        ArrayMap {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: Eq, V: PartialEq> PartialEq for ArrayMap<K, V> {
    /// Maps are equal when they hold the same entries, whatever order they're stored in.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq, V: Eq> Eq for ArrayMap<K, V> {}

impl<K: Debug, V: Debug> Debug for ArrayMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value))).finish()
    }
}
