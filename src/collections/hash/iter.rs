use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::Iter as ChainIter;

/// A type for borrowed iteration over the entries of a [`HashTable`](super::HashTable). Produces
/// values of type `(&K, &V)`, visiting the buckets in order and each chain from front to back.
///
/// See [`HashTable::iter`](super::HashTable::iter).
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Option<LinkedList<(K, V)>>>,
    pub(crate) chain: Option<ChainIter<'a, (K, V)>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.chain = self.buckets.next()?.as_ref().map(LinkedList::iter);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// A type for borrowed iteration over the keys of a [`HashTable`](super::HashTable). Produces
/// values of type `&K`.
///
/// See [`HashTable::keys`](super::HashTable::keys).
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// A type for borrowed iteration over the occupied slots of a [`DirectTable`](super::DirectTable).
/// Produces values of type `(usize, &V)` in ascending key order.
///
/// See [`DirectTable::iter`](super::DirectTable::iter).
pub struct Entries<'a, V> {
    pub(crate) slots: Enumerate<slice::Iter<'a, Option<V>>>,
    pub(crate) remaining: usize,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (usize, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.slots.find_map(|(key, slot)| Some((key, slot.as_ref()?)))?;
        self.remaining -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> FusedIterator for Entries<'a, V> {}

impl<'a, V> ExactSizeIterator for Entries<'a, V> {}
