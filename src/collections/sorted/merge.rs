//! Iterators which merge two ascending sequences, advancing whichever side holds the smaller
//! element. Each of them visits every element of both inputs at most once.

use std::cmp::Ordering;
use std::iter::{FusedIterator, Peekable};

use crate::collections::contiguous::vector::Iter as VectorIter;

/// An iterator over the union of two sorted sets. See [`SortedArraySet::union`](super::SortedArraySet::union).
pub struct SortedUnion<'a, T> {
    a: Peekable<VectorIter<'a, T>>,
    b: Peekable<VectorIter<'a, T>>,
}

impl<'a, T> SortedUnion<'a, T> {
    pub(crate) fn new(a: VectorIter<'a, T>, b: VectorIter<'a, T>) -> SortedUnion<'a, T> {
        SortedUnion {
            a: a.peekable(),
            b: b.peekable(),
        }
    }
}

impl<'a, T: Ord> Iterator for SortedUnion<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.a.peek(), self.b.peek()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };

        match order {
            Ordering::Less => self.a.next(),
            Ordering::Greater => self.b.next(),
            Ordering::Equal => {
                // Present in both, yield it once.
                self.b.next();
                self.a.next()
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a, b) = (self.a.len(), self.b.len());
        (a.max(b), a.checked_add(b))
    }
}

impl<'a, T: Ord> FusedIterator for SortedUnion<'a, T> {}

/// An iterator over the intersection of two sorted sets. See
/// [`SortedArraySet::intersection`](super::SortedArraySet::intersection).
pub struct SortedIntersection<'a, T> {
    a: Peekable<VectorIter<'a, T>>,
    b: Peekable<VectorIter<'a, T>>,
}

impl<'a, T> SortedIntersection<'a, T> {
    pub(crate) fn new(a: VectorIter<'a, T>, b: VectorIter<'a, T>) -> SortedIntersection<'a, T> {
        SortedIntersection {
            a: a.peekable(),
            b: b.peekable(),
        }
    }
}

impl<'a, T: Ord> Iterator for SortedIntersection<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let order = self.a.peek()?.cmp(self.b.peek()?);
            match order {
                Ordering::Less => {
                    self.a.next();
                },
                Ordering::Greater => {
                    self.b.next();
                },
                Ordering::Equal => {
                    self.b.next();
                    return self.a.next();
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.a.len().min(self.b.len())))
    }
}

impl<'a, T: Ord> FusedIterator for SortedIntersection<'a, T> {}

/// An iterator over the elements of one sorted set that are missing from another. See
/// [`SortedArraySet::difference`](super::SortedArraySet::difference).
pub struct SortedDifference<'a, T> {
    a: Peekable<VectorIter<'a, T>>,
    b: Peekable<VectorIter<'a, T>>,
}

impl<'a, T> SortedDifference<'a, T> {
    pub(crate) fn new(a: VectorIter<'a, T>, b: VectorIter<'a, T>) -> SortedDifference<'a, T> {
        SortedDifference {
            a: a.peekable(),
            b: b.peekable(),
        }
    }
}

impl<'a, T: Ord> Iterator for SortedDifference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let a = self.a.peek()?;
            let order = match self.b.peek() {
                Some(b) => a.cmp(b),
                None => Ordering::Less,
            };

            match order {
                Ordering::Less => return self.a.next(),
                Ordering::Greater => {
                    self.b.next();
                },
                Ordering::Equal => {
                    self.a.next();
                    self.b.next();
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.a.len()))
    }
}

impl<'a, T: Ord> FusedIterator for SortedDifference<'a, T> {}
