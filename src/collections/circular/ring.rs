use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::DEFAULT_CAP;
use crate::collections::contiguous::Buffer;
use crate::util::error::InvalidCapacity;

/// The circular array shared by [`Queue`](super::Queue) and [`Deque`](super::Deque).
///
/// Elements occupy the slots from `front` (inclusive) to `back` (exclusive), wrapping around at the
/// capacity. `front == back` means empty, so one slot always stays free and a Ring with capacity
/// `n` holds at most `n - 1` elements.
pub(crate) struct Ring<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Ring<T> {
    pub fn new() -> Ring<T> {
        Ring {
            buf: Buffer::with_cap(DEFAULT_CAP),
            front: 0,
            back: 0,
        }
    }

    pub fn with_cap(cap: usize) -> Result<Ring<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(Ring {
            buf: Buffer::with_cap(cap),
            front: 0,
            back: 0,
        })
    }

    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub fn increment(&self, index: usize) -> usize {
        (index + 1) % self.cap()
    }

    pub fn decrement(&self, index: usize) -> usize {
        (index + self.cap() - 1) % self.cap()
    }

    pub fn len(&self) -> usize {
        (self.back + self.cap() - self.front) % self.cap()
    }

    pub const fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Whether adding one more element would make `front` and `back` meet. Since
    /// `increment(back) == front` exactly when `decrement(front) == back`, this holds for both ends.
    pub fn is_full(&self) -> bool {
        self.increment(self.back) == self.front
    }

    /// Doubles the capacity. If the elements wrapped past the end of the old slots, the wrapped
    /// part is moved to sit directly after them so that the window stays contiguous modulo the new
    /// capacity.
    pub fn grow(&mut self) {
        let old_cap = self.cap();
        self.buf.grow();

        if self.back < self.front {
            self.buf.relocate(0..self.back, old_cap);
            self.back += old_cap;
            log::trace!(
                "Unwrapped circular buffer, front {} and back {} with capacity {}.",
                self.front,
                self.back,
                self.cap()
            );
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.buf.put(self.back, value);
        self.back = self.increment(self.back);
    }

    pub fn push_front(&mut self, value: T) {
        self.front = self.decrement(self.front);
        self.buf.put(self.front, value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf.take(self.front);
        self.front = self.increment(self.front);
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back = self.decrement(self.back);
        self.buf.take(self.back)
    }

    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf.get(self.front)
    }

    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf.get(self.decrement(self.back))
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.front = 0;
        self.back = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            index: self.front,
            remaining: self.len(),
        }
    }
}

impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        Ring {
            buf: self.buf.clone(),
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: Debug> Debug for Ring<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A borrowed iterator over the elements of a [`Queue`](super::Queue) or
/// [`Deque`](super::Deque), from front to back.
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.ring.buf.get(self.index);
        self.index = self.ring.increment(self.index);
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cap = self.ring.cap();
        self.ring.buf.get((self.index + self.remaining) % cap)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            index: self.index,
            remaining: self.remaining,
        }
    }
}
