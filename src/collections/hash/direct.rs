use std::fmt::{self, Debug, Formatter};

use super::Entries;
use crate::collections::contiguous::Buffer;
use crate::collections::traits::Container;
#[doc(inline)]
pub use crate::util::error::{InvalidCapacity, InvalidKey};

/// A table indexed directly by its keys, which must be integers in `0..dim`.
///
/// There's no hashing and no collisions: key `k` is slot `k` of a fixed [`Buffer`]. Every operation
/// is `O(1)`, at the cost of one slot for every possible key.
///
/// # Examples
/// ```
/// # use adt_collections::collections::hash::DirectTable;
/// let mut table = DirectTable::with_cap(8).unwrap();
/// assert_eq!(table.insert(3, 'c'), Ok(None));
/// assert_eq!(table.insert(3, 'C'), Ok(Some('c')));
/// assert_eq!(table.find(3), Ok(Some(&'C')));
/// assert!(table.insert(8, 'x').is_err());
/// assert_eq!(table.load_factor(), 0.125);
/// ```
pub struct DirectTable<V> {
    pub(crate) slots: Buffer<V>,
    pub(crate) len: usize,
}

impl<V> DirectTable<V> {
    /// Creates an empty table accepting the keys `0..dim`.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `dim` is 0.
    pub fn with_cap(dim: usize) -> Result<DirectTable<V>, InvalidCapacity> {
        if dim == 0 {
            return Err(InvalidCapacity { cap: dim });
        }
        Ok(DirectTable {
            slots: Buffer::with_cap(dim),
            len: 0,
        })
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the dimension of the table, one past the largest valid key.
    pub fn cap(&self) -> usize {
        self.slots.cap()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    fn check_key(&self, key: usize) -> Result<(), InvalidKey> {
        if key >= self.cap() {
            return Err(InvalidKey {
                key,
                range: self.cap(),
            });
        }
        Ok(())
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// # Errors
    /// Returns [`InvalidKey`] if `key` is not less than the dimension.
    pub fn insert(&mut self, key: usize, value: V) -> Result<Option<V>, InvalidKey> {
        self.check_key(key)?;
        let previous = self.slots.put(key, value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Empties the slot for `key`, returning what it held.
    ///
    /// # Errors
    /// Returns [`InvalidKey`] if `key` is not less than the dimension.
    pub fn remove(&mut self, key: usize) -> Result<Option<V>, InvalidKey> {
        self.check_key(key)?;
        let removed = self.slots.take(key);
        if removed.is_some() {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`InvalidKey`] if `key` is not less than the dimension.
    pub fn find(&self, key: usize) -> Result<Option<&V>, InvalidKey> {
        self.check_key(key)?;
        Ok(self.slots.get(key))
    }

    pub fn find_mut(&mut self, key: usize) -> Result<Option<&mut V>, InvalidKey> {
        self.check_key(key)?;
        Ok(self.slots.get_mut(key))
    }

    /// Returns an iterator over the occupied slots as `(key, &value)`, in ascending key order.
    pub fn iter(&self) -> Entries<'_, V> {
        self.into_iter()
    }
}

impl<V> Container for DirectTable<V> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn make_empty(&mut self) {
        self.slots.clear();
        self.len = 0;
    }
}

impl<'a, V> IntoIterator for &'a DirectTable<V> {
    type Item = (usize, &'a V);

    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Entries {
            slots: self.slots.slots().iter().enumerate(),
            remaining: self.len,
        }
    }
}

impl<V: Clone> Clone for DirectTable<V> {
    fn clone(&self) -> Self {
        DirectTable {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<V: Debug> Debug for DirectTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
