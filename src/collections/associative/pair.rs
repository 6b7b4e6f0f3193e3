use std::borrow::Borrow;
use std::iter::FusedIterator;

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::{IntoIter as VectorIntoIter, Iter as VectorIter};

/// A key and whatever is associated with it. Dictionaries pair each key with a
/// [`Vector`] of values, maps with a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub const fn new(key: K, value: V) -> Pair<K, V> {
        Pair {
            key,
            value,
        }
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Returns the index of the Pair with a key equal to `key`, scanning from the start.
pub(crate) fn position<K, V, Q>(pairs: &Vector<Pair<K, V>>, key: &Q) -> Option<usize>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    pairs.iter().position(|pair| Borrow::<Q>::borrow(&pair.key) == key)
}

/// An iterator over the keys of a pair-store, in storage order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: VectorIter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| &pair.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| &pair.key)
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

/// A borrowed iterator over the entries of a pair-store, in storage order.
pub struct Iter<'a, K, V> {
    pub(crate) inner: VectorIter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair.key, &pair.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair.key, &pair.value))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An owned iterator over the entries of a pair-store, in storage order.
pub struct IntoIter<K, V> {
    pub(crate) inner: VectorIntoIter<Pair<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Pair::into_parts)
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
