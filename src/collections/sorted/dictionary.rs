use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use super::bisect;
use crate::collections::associative::{IntoIter, Iter, Keys, Pair};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter as VectorIter;
use crate::collections::traits::Container;
use crate::util::error::{EmptyCollection, InvalidCapacity};

/// A multimap which keeps its keys in ascending order.
///
/// This has the same interface as [`ArrayDictionary`](crate::collections::associative::ArrayDictionary),
/// but finds keys by bisection. New keys are inserted in place by shifting every following key
/// right, and removed keys are closed up by shifting left, so keys stay sorted throughout and
/// [`sorted_keys`](SortedArrayDictionary::sorted_keys) needs no extra work.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the dictionary.
/// - `m`: The number of values stored under the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)`, `O(log n)`* |
/// | `find` | `O(log n)` |
/// | `find_all` | `O(log n)` |
/// | `remove` | `O(n + m)` |
/// | `remove_all` | `O(n)` |
/// | `sorted_keys` | `O(1)` |
///
/// \* If the key is already present, no shifting is needed.
///
/// # Examples
/// ```
/// # use adt_collections::collections::sorted::SortedArrayDictionary;
/// let mut dict = SortedArrayDictionary::new();
/// dict.insert(3, 'c');
/// dict.insert(1, 'a');
/// dict.insert(2, 'b');
/// dict.insert(1, 'A');
/// assert!(dict.sorted_keys().eq(&[1, 2, 3]));
/// assert!(dict.find_all(&1).eq(&['a', 'A']));
/// ```
pub struct SortedArrayDictionary<K, V> {
    pub(crate) pairs: Vector<Pair<K, Vector<V>>>,
}

impl<K: Ord, V> SortedArrayDictionary<K, V> {
    /// Creates an empty dictionary. Memory is allocated on the first insertion.
    pub fn new() -> SortedArrayDictionary<K, V> {
        SortedArrayDictionary {
            pairs: Vector::new(),
        }
    }

    /// Creates an empty dictionary with room for `cap` keys, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<SortedArrayDictionary<K, V>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(SortedArrayDictionary {
            pairs: Vector::with_cap(cap),
        })
    }

    /// Returns the number of distinct keys in the dictionary.
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

    /// Associates `value` with `key`, after any values already stored under it.
    pub fn insert(&mut self, key: K, value: V) {
        match self.search(&key) {
            Ok(index) => self.pairs[index].value.push(value),
            Err(index) => {
                let mut values = Vector::with_cap(1);
                values.push(value);
                self.pairs.insert(index, Pair::new(key, values));
            },
        }
    }

    /// Removes and returns the first value stored under `key`. If that was the key's only value,
    /// the key is removed too.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the dictionary holds no keys at all. A key that simply isn't
    /// present gives `Ok(None)`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, EmptyCollection>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        let Ok(index) = self.search(key) else {
            return Ok(None);
        };

        let values = &mut self.pairs[index].value;
        let value = values.try_remove(0).ok();
        if values.is_empty() {
            self.pairs.remove(index);
        }
        Ok(value)
    }

    /// Removes `key` along with every value stored under it, returning the values.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the dictionary holds no keys at all.
    pub fn remove_all<Q>(&mut self, key: &Q) -> Result<Option<Vector<V>>, EmptyCollection>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(self.search(key).ok().map(|index| self.pairs.remove(index).value))
    }

    /// Returns the first value stored under `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.pairs[self.search(key).ok()?].value.first()
    }

    /// Returns an iterator over every value stored under `key`, which is empty if the key isn't
    /// present.
    pub fn find_all<Q>(&self, key: &Q) -> VectorIter<'_, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Ok(index) => self.pairs[index].value.iter(),
            Err(_) => VectorIter::default(),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_ok()
    }

    /// Returns an iterator over the keys of the dictionary in ascending order.
    pub fn sorted_keys(&self) -> Keys<'_, K, Vector<V>> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the keys of the dictionary, which for a sorted dictionary is the
    /// same as [`sorted_keys`](SortedArrayDictionary::sorted_keys).
    pub fn keys(&self) -> Keys<'_, K, Vector<V>> {
        self.sorted_keys()
    }

    /// Returns an iterator over every key and its values, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, Vector<V>> {
        self.into_iter()
    }
}

impl<K, V> Container for SortedArrayDictionary<K, V> {
    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn make_empty(&mut self) {
        self.pairs.clear();
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedArrayDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedArrayDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = SortedArrayDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V> IntoIterator for SortedArrayDictionary<K, V> {
    type Item = (K, Vector<V>);

    type IntoIter = IntoIter<K, Vector<V>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedArrayDictionary<K, V> {
    type Item = (&'a K, &'a Vector<V>);

    type IntoIter = Iter<'a, K, Vector<V>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl<K: Ord, V> Default for SortedArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for SortedArrayDictionary<K, V> {
    fn clone(&self) -> Self {
        SortedArrayDictionary {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for SortedArrayDictionary<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}
