use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::{IntoIter as VectorIntoIter, Iter as VectorIter};
use crate::collections::traits::{Container, Set};
use crate::util::error::InvalidCapacity;

/// An unsorted set of distinct elements, stored in a [`Vector`] and searched linearly.
///
/// Set algebra comes from the [`Set`] trait, so it's lazy and costs `O(n * m)`.
///
/// # Examples
/// ```
/// # use adt_collections::collections::associative::ArraySet;
/// # use adt_collections::collections::traits::Set;
/// let odd: ArraySet<u8> = [1, 3, 5].into_iter().collect();
/// let low: ArraySet<u8> = [2, 3, 4].into_iter().collect();
///
/// let mut union: Vec<_> = odd.union(&low).copied().collect();
/// union.sort();
/// assert_eq!(union, [1, 2, 3, 4, 5]);
/// assert!(odd.intersection(&low).eq(&[3]));
/// assert!(odd.difference(&low).eq(&[1, 5]));
/// ```
pub struct ArraySet<T> {
    pub(crate) items: Vector<T>,
}

impl<T: Eq> ArraySet<T> {
    /// Creates an empty set. Memory is allocated on the first insertion.
    pub fn new() -> ArraySet<T> {
        ArraySet {
            items: Vector::new(),
        }
    }

    /// Creates an empty set with room for `cap` elements, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<ArraySet<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(ArraySet {
            items: Vector::with_cap(cap),
        })
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the element equal to `item`, returning it if it was present. The last element takes
    /// its place.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.items.iter().position(|element| Borrow::<Q>::borrow(element) == item)?;
        Some(self.items.swap_remove(index))
    }

    /// Returns the elements of the set as a slice-like [`Vector`], in storage order.
    pub fn to_array(&self) -> Vector<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T: Eq> Set<T> for ArraySet<T> {
    type Iter<'a> = VectorIter<'a, T> where Self: 'a, T: 'a;

    fn add(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.items.iter()
    }
}

impl<T> Container for ArraySet<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn make_empty(&mut self) {
        self.items.clear();
    }
}

impl<T: Eq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ArraySet::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;

    type IntoIter = VectorIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;

    type IntoIter = VectorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Eq> Default for ArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArraySet<T> {
    fn clone(&self) -> Self {
        ArraySet {
            items: self.items.clone(),
        }
    }
}

impl<T: Eq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: Debug> Debug for ArraySet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
