use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

use super::Container;

/// A container of distinct elements, compared by equality alone.
///
/// Every operation beyond the required four is derived from [`contains`](Set::contains): each
/// element of one operand is looked up in the other, so the algebra costs `O(n * m)` for a set
/// without a faster lookup. The results are lazy iterators in the first operand's storage order.
/// [`SortedArraySet`](crate::collections::sorted::SortedArraySet) merges instead, see its inherent
/// methods.
pub trait Set<T>: Container + IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Inserts `item`. A set that already held an equal item is left as it was and `false` is
    /// returned.
    fn add(&mut self, item: T) -> bool;

    fn contains(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    /// Borrows each element once, in storage order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Consumes both sets, yielding the elements of `self` missing from `other`. (`self \ other`)
    #[doc(alias = "into_subtraction")]
    fn into_difference(self, other: Self) -> IntoDifference<Self, T> {
        IntoMembership::new(self, other, false)
    }

    /// Yields the elements of `self` missing from `other`. (`self \ other`)
    #[doc(alias = "subtraction")]
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Membership::new(self, other, false)
    }

    /// Yields the elements held by exactly one of the two sets: `self \ other` first, then
    /// `other \ self`. (`self △ other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Consumes both sets, yielding the elements of `self` that `other` also holds. (`self ∩
    /// other`)
    fn into_intersection(self, other: Self) -> IntoIntersection<Self, T> {
        IntoMembership::new(self, other, true)
    }

    /// Yields the elements of `self` that `other` also holds. (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Membership::new(self, other, true)
    }

    /// Yields every element of `self`, then the elements of `other` that `self` lacks, so each
    /// distinct element of either set appears once. (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// `self ⊆ other`
    fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// `self ⊇ other`
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

/// Borrowed elements of one set, kept or dropped depending on whether a second set contains them.
///
/// `shared == true` keeps the common elements (an intersection), `false` keeps the rest (a
/// difference).
pub struct Membership<'a, S: Set<T>, T: 'a> {
    inner: S::Iter<'a>,
    other: &'a S,
    shared: bool,
}

impl<'a, S: Set<T>, T: 'a> Membership<'a, S, T> {
    fn new(set: &'a S, other: &'a S, shared: bool) -> Membership<'a, S, T> {
        Membership {
            inner: set.iter(),
            other,
            shared,
        }
    }
}

impl<'a, S: Set<T>, T: 'a> Iterator for Membership<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (other, shared) = (self.other, self.shared);
        self.inner.find(|item| other.contains(item) == shared)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// See [`Set::difference`].
pub type Difference<'a, S, T> = Membership<'a, S, T>;

/// See [`Set::intersection`].
pub type Intersection<'a, S, T> = Membership<'a, S, T>;

/// The owned counterpart of [`Membership`], which holds on to both sets.
pub struct IntoMembership<S: Set<T>, T> {
    inner: S::IntoIter,
    other: S,
    shared: bool,
    _item: PhantomData<T>,
}

impl<S: Set<T>, T> IntoMembership<S, T> {
    fn new(set: S, other: S, shared: bool) -> IntoMembership<S, T> {
        IntoMembership {
            inner: set.into_iter(),
            other,
            shared,
            _item: PhantomData,
        }
    }
}

impl<S: Set<T>, T> Iterator for IntoMembership<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (other, shared) = (&self.other, self.shared);
        self.inner.find(|item| other.contains(item) == shared)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoMembership<S, T> where S::IntoIter: FusedIterator {}

/// See [`Set::into_difference`].
pub type IntoDifference<S, T> = IntoMembership<S, T>;

/// See [`Set::into_intersection`].
pub type IntoIntersection<S, T> = IntoMembership<S, T>;

/// See [`Set::symmetric_difference`].
pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// See [`Set::union`].
pub struct Union<'a, S: Set<T>, T: 'a> {
    inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
