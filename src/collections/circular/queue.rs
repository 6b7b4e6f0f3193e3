use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{CapacityPolicy, Doubling, Fixed, Iter, ring::Ring};
use crate::collections::traits::Container;
use crate::util::error::{ContainerFull, EmptyCollection, InvalidCapacity};

/// A first-in first-out collection stored in a circular array.
///
/// What happens when the array is out of room depends on `P`: a [`Doubling`] Queue grows and
/// never reports full, while a [`Fixed`] Queue (see [`FixedQueue`]) fails with [`ContainerFull`].
/// A fixed Queue created with capacity `n` can hold `n - 1` elements.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `front` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* A Doubling Queue without room for the new element grows, taking `O(n)`.
///
/// # Examples
/// ```
/// # use adt_collections::collections::circular::Queue;
/// let mut queue: Queue<char> = Queue::with_cap(2).unwrap();
/// for c in "abc".chars() {
///     queue.enqueue(c).unwrap();
/// }
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert_eq!(queue.front(), Ok(&'b'));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct Queue<T, P = Doubling> {
    ring: Ring<T>,
    _policy: PhantomData<P>,
}

/// A [`Queue`] which never grows.
pub type FixedQueue<T> = Queue<T, Fixed>;

impl<T, P: CapacityPolicy> Queue<T, P> {
    /// Creates an empty Queue with the default capacity.
    pub fn new() -> Queue<T, P> {
        Queue {
            ring: Ring::new(),
            _policy: PhantomData,
        }
    }

    /// Creates an empty Queue with the provided capacity, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<Queue<T, P>, InvalidCapacity> {
        Ok(Queue {
            ring: Ring::with_cap(cap)?,
            _policy: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.ring.cap()
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Errors
    /// A [`Fixed`] Queue returns [`ContainerFull`] if it has no room left.
    ///
    /// # Panics
    /// Panics if a [`Doubling`] Queue's capacity would overflow [`usize`].
    pub fn enqueue(&mut self, value: T) -> Result<(), ContainerFull> {
        if self.ring.is_full() {
            if !P::GROWABLE {
                return Err(ContainerFull { cap: self.cap() });
            }
            self.ring.grow();
        }
        self.ring.push_back(value);
        Ok(())
    }

    /// Removes and returns the element at the front of the Queue.
    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.ring.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the front of the Queue, without removing it.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.ring.peek_front().ok_or(EmptyCollection)
    }

    /// Returns an iterator over the Queue's elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T, P: CapacityPolicy> Container for Queue<T, P> {
    fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    fn make_empty(&mut self) {
        self.ring.clear();
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a Queue<T, P> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: CapacityPolicy> Default for Queue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P> Clone for Queue<T, P> {
    fn clone(&self) -> Self {
        Queue {
            ring: self.ring.clone(),
            _policy: PhantomData,
        }
    }
}

impl<T: Debug, P> Debug for Queue<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.ring.fmt(f)
    }
}
