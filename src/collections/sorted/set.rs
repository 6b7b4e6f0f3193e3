use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use super::{SortedDifference, SortedIntersection, SortedUnion, bisect};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::{IntoIter as VectorIntoIter, Iter as VectorIter};
use crate::collections::traits::Container;
use crate::util::error::InvalidCapacity;

/// A set of distinct elements kept in ascending order.
///
/// Because both operands are sorted, [`union`](SortedArraySet::union),
/// [`intersection`](SortedArraySet::intersection) and [`difference`](SortedArraySet::difference)
/// walk the two sets side by side in `O(n + m)`, yielding their results in ascending order too.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(n)` |
/// | `contains` | `O(log n)` |
/// | `remove` | `O(n)` |
/// | `union/intersection/difference` | `O(n + m)` |
///
/// # Examples
/// ```
/// # use adt_collections::collections::sorted::SortedArraySet;
/// let odd: SortedArraySet<u8> = [5, 3, 1].into_iter().collect();
/// let low: SortedArraySet<u8> = [4, 2, 3].into_iter().collect();
///
/// assert!(odd.union(&low).eq(&[1, 2, 3, 4, 5]));
/// assert!(odd.intersection(&low).eq(&[3]));
/// assert!(odd.difference(&low).eq(&[1, 5]));
/// ```
pub struct SortedArraySet<T> {
    pub(crate) items: Vector<T>,
}

impl<T: Ord> SortedArraySet<T> {
    /// Creates an empty set. Memory is allocated on the first insertion.
    pub fn new() -> SortedArraySet<T> {
        SortedArraySet {
            items: Vector::new(),
        }
    }

    /// Creates an empty set with room for `cap` elements, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<SortedArraySet<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(SortedArraySet {
            items: Vector::with_cap(cap),
        })
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn search<Q>(&self, item: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        bisect(&self.items, |element| Borrow::<Q>::borrow(element).cmp(item))
    }

    /// Adds `item` to the set, returning false (and leaving the set unchanged) if an equal item was
    /// already present.
    ///
    /// The new item is appended and then swapped leftwards until the order is restored.
    pub fn add(&mut self, item: T) -> bool {
        if self.search(&item).is_ok() {
            return false;
        }

        self.items.push(item);
        let mut index = self.items.len() - 1;
        while index > 0 && self.items[index - 1] > self.items[index] {
            self.items.swap(index - 1, index);
            index -= 1;
        }
        true
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(item).is_ok()
    }

    /// Removes the element equal to `item`, returning it if it was present. Later elements shift
    /// left to fill the gap.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.search(item).ok()?;
        Some(self.items.remove(index))
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> VectorIter<'_, T> {
        self.items.iter()
    }

    /// Returns a copy of the elements, in ascending order.
    pub fn to_sorted_array(&self) -> Vector<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Creates an iterator over the elements in either `self` or `other`, in ascending order.
    /// (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a Self) -> SortedUnion<'a, T> {
        SortedUnion::new(self.iter(), other.iter())
    }

    /// Creates an iterator over the elements in both `self` and `other`, in ascending order.
    /// (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a Self) -> SortedIntersection<'a, T> {
        SortedIntersection::new(self.iter(), other.iter())
    }

    /// Creates an iterator over the elements in `self` but not `other`, in ascending order.
    /// (`self \ other`)
    #[doc(alias = "subtraction")]
    pub fn difference<'a>(&'a self, other: &'a Self) -> SortedDifference<'a, T> {
        SortedDifference::new(self.iter(), other.iter())
    }

    /// Returns true if `other` contains every element of `self`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.difference(other).next().is_none()
    }

    /// Returns true if `self` contains every element of `other`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<T> Container for SortedArraySet<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn make_empty(&mut self) {
        self.items.clear();
    }
}

impl<T: Ord> Extend<T> for SortedArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SortedArraySet::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for SortedArraySet<T> {
    type Item = T;

    type IntoIter = VectorIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedArraySet<T> {
    type Item = &'a T;

    type IntoIter = VectorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord> Default for SortedArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SortedArraySet<T> {
    fn clone(&self) -> Self {
        SortedArraySet {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SortedArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for SortedArraySet<T> {}

impl<T: Debug> Debug for SortedArraySet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
