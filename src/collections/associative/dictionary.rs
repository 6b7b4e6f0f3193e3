use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use super::{IntoIter, Iter, Keys, Pair, position};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter as VectorIter;
use crate::collections::traits::Container;
use crate::util::error::{EmptyCollection, InvalidCapacity};

/// An unsorted multimap: every key is associated with the sequence of values inserted under it.
///
/// Each key is stored once, in a [`Pair`] with a [`Vector`] of its values in insertion order.
/// Pairs are kept in a Vector of their own and found by linear search. When a key's last value is
/// removed its Pair is swapped with the last one, so the order of keys isn't preserved.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the dictionary.
/// - `m`: The number of values stored under the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `find` | `O(n)` |
/// | `find_all` | `O(n)` |
/// | `remove` | `O(n + m)` |
/// | `remove_all` | `O(n)` |
/// | `keys` | `O(1)` |
///
/// # Examples
/// ```
/// # use adt_collections::collections::associative::ArrayDictionary;
/// let mut dict = ArrayDictionary::new();
/// dict.insert("fruit", "apple");
/// dict.insert("fruit", "pear");
/// dict.insert("veg", "leek");
///
/// assert_eq!(dict.find("fruit"), Some(&"apple"));
/// assert!(dict.find_all("fruit").eq(&["apple", "pear"]));
/// assert_eq!(dict.remove("fruit"), Ok(Some("apple")));
/// assert_eq!(dict.remove("meat"), Ok(None));
/// assert_eq!(dict.len(), 2);
/// ```
pub struct ArrayDictionary<K, V> {
    pub(crate) pairs: Vector<Pair<K, Vector<V>>>,
}

impl<K: Eq, V> ArrayDictionary<K, V> {
    /// Creates an empty dictionary. Memory is allocated on the first insertion.
    pub fn new() -> ArrayDictionary<K, V> {
        ArrayDictionary {
            pairs: Vector::new(),
        }
    }

    /// Creates an empty dictionary with room for `cap` keys, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<ArrayDictionary<K, V>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(ArrayDictionary {
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

    /// Associates `value` with `key`, after any values already stored under it.
    pub fn insert(&mut self, key: K, value: V) {
        match position(&self.pairs, &key) {
            Some(index) => self.pairs[index].value.push(value),
            None => {
                let mut values = Vector::with_cap(1);
                values.push(value);
                self.pairs.push(Pair::new(key, values));
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
        Q: Eq + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        let Some(index) = position(&self.pairs, key) else {
            return Ok(None);
        };

        let values = &mut self.pairs[index].value;
        let value = values.try_remove(0).ok();
        if values.is_empty() {
            self.pairs.swap_remove(index);
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
        Q: Eq + ?Sized,
    {
        if self.pairs.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(position(&self.pairs, key).map(|index| self.pairs.swap_remove(index).value))
    }

    /// Returns the first value stored under `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs[position(&self.pairs, key)?].value.first()
    }

    /// Returns an iterator over every value stored under `key`, which is empty if the key isn't
    /// present.
    pub fn find_all<Q>(&self, key: &Q) -> VectorIter<'_, V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match position(&self.pairs, key) {
            Some(index) => self.pairs[index].value.iter(),
            None => VectorIter::default(),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        position(&self.pairs, key).is_some()
    }

    /// Returns an iterator over the keys of the dictionary, in no particular order.
    pub fn keys(&self) -> Keys<'_, K, Vector<V>> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over every key and its values.
    pub fn iter(&self) -> Iter<'_, K, Vector<V>> {
        self.into_iter()
    }
}

impl<K, V> Container for ArrayDictionary<K, V> {
    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn make_empty(&mut self) {
        self.pairs.clear();
    }
}

impl<K: Eq, V> Extend<(K, V)> for ArrayDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for ArrayDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = ArrayDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V> IntoIterator for ArrayDictionary<K, V> {
    type Item = (K, Vector<V>);

    type IntoIter = IntoIter<K, Vector<V>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayDictionary<K, V> {
    type Item = (&'a K, &'a Vector<V>);

    type IntoIter = Iter<'a, K, Vector<V>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.pairs.iter(),
        }
    }
}

impl<K: Eq, V> Default for ArrayDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for ArrayDictionary<K, V> {
    fn clone(&self) -> Self {
        ArrayDictionary {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: Debug, V: Debug> Debug for ArrayDictionary<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}
