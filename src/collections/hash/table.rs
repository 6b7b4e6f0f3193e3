use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::mem;

use super::{Iter, Keys};
use crate::collections::contiguous::Buffer;
use crate::collections::linked::LinkedList;
use crate::collections::traits::Container;
use crate::util::error::InvalidCapacity;

/// A hash table with separate chaining and a fixed number of buckets.
///
/// Each bucket is either absent or holds a [`LinkedList`] of `(K, V)` entries, and an entry for key
/// `k` only ever lives in bucket `hash(k) % cap`. The table never rehashes, so the number of
/// buckets chosen at construction is the number it keeps, and lookups slow down linearly with the
/// [`load_factor`](HashTable::load_factor).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `c`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1 + n/c)` |
/// | `remove` | `O(1 + n/c)` |
/// | `find` | `O(1 + n/c)` |
/// | `make_empty` | `O(c + n)` |
///
/// # Examples
/// ```
/// # use adt_collections::collections::hash::HashTable;
/// let mut table = HashTable::with_cap(11).unwrap();
/// assert_eq!(table.insert("one", 1), None);
/// assert_eq!(table.insert("two", 2), None);
/// assert_eq!(table.insert("one", 10), Some(1));
///
/// assert_eq!(table.find("one"), Some(&10));
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.remove("two"), Some(2));
/// assert_eq!(table.find("two"), None);
/// ```
pub struct HashTable<K, V, B = RandomState> {
    pub(crate) buckets: Buffer<LinkedList<(K, V)>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Creates an empty HashTable with `cap` buckets, hashing with [`RandomState`].
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `cap` is 0, because no bucket could be chosen for any key.
    pub fn with_cap(cap: usize) -> Result<HashTable<K, V>, InvalidCapacity> {
        HashTable::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates an empty HashTable with `cap` buckets, which hashes keys with `hasher`.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `cap` is 0.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Result<HashTable<K, V, B>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        log::debug!("Created hash table with {cap} buckets.");
        Ok(HashTable {
            buckets: Buffer::with_cap(cap),
            len: 0,
            hasher,
        })
    }

    /// Returns the number of distinct keys in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.cap()
    }

    /// Returns the average number of entries per bucket, `len / cap`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Returns a reference to the hasher used by this table.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns the index of the bucket that `key` belongs to.
    pub(crate) fn index_from_key<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        // The capacity is never 0, and the remainder always fits back into a usize.
        (self.hasher.hash_one(key) % self.cap() as u64) as usize
    }

    fn chain_for<Q>(&self, key: &Q) -> Option<&LinkedList<(K, V)>>
    where
        Q: Hash + ?Sized,
    {
        self.buckets.get(self.index_from_key(key))
    }

    /// Associates `value` with `key`, returning the value it replaced if the key was already
    /// present.
    ///
    /// A new key creates its bucket's chain if needed and is appended to the end of it.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_from_key(&key);
        match self.buckets.get_mut(index) {
            Some(chain) => {
                let mut cursor = chain.cursor();
                while let Ok(entry) = cursor.next() {
                    if entry.0 == key {
                        return Some(mem::replace(&mut entry.1, value));
                    }
                }
                cursor.add((key, value));
            },
            None => {
                let mut chain = LinkedList::new();
                chain.add_last((key, value));
                self.buckets.put(index, chain);
            },
        }
        self.len += 1;
        None
    }

    /// Removes `key` from the table, returning its value if it was present. A bucket whose chain
    /// becomes empty is dropped.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_from_key(key);
        let chain = self.buckets.get_mut(index)?;

        let mut removed = None;
        let mut cursor = chain.cursor();
        while let Ok(entry) = cursor.next() {
            if Borrow::<Q>::borrow(&entry.0) == key {
                removed = cursor.remove().ok().map(|(_, value)| value);
                break;
            }
        }

        if chain.is_empty() {
            self.buckets.take(index);
        }
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns a reference to the value associated with `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain_for(key)?
            .iter()
            .find(|entry| Borrow::<Q>::borrow(&entry.0) == key)
            .map(|entry| &entry.1)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_from_key(key);
        self.buckets
            .get_mut(index)?
            .find_mut(|entry| Borrow::<Q>::borrow(&entry.0) == key)
            .map(|entry| &mut entry.1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns an iterator over the entries of the table, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over the keys of the table, bucket by bucket.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.iter(),
        }
    }
}

impl<K, V, B> Container for HashTable<K, V, B> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn make_empty(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashTable<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, B> IntoIterator for &'a HashTable<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.slots().iter(),
            chain: None,
            remaining: self.len,
        }
    }
}

impl<K: Clone, V: Clone, B: Clone> Clone for HashTable<K, V, B> {
    fn clone(&self) -> Self {
        HashTable {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Debug, V: Debug, B: Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Debug, V: Debug, B> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.into_iter()).finish()
    }
}
