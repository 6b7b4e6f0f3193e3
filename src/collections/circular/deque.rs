use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{CapacityPolicy, Doubling, Fixed, Iter, ring::Ring};
use crate::collections::traits::Container;
use crate::util::error::{ContainerFull, EmptyCollection, InvalidCapacity};

/// A double-ended queue stored in a circular array, allowing elements to be added and removed at
/// both ends in `O(1)`.
///
/// Like [`Queue`](super::Queue), growth is controlled by `P`. A [`Fixed`] Deque created with
/// capacity `n` holds `n - 1` elements.
///
/// # Examples
/// ```
/// # use adt_collections::collections::circular::FixedDeque;
/// let mut deque: FixedDeque<u8> = FixedDeque::with_cap(3).unwrap();
/// deque.add_last(2).unwrap();
/// deque.add_first(1).unwrap();
/// assert!(deque.add_first(0).is_err());
/// assert_eq!(deque.get_first(), Ok(&1));
/// assert_eq!(deque.remove_last(), Ok(2));
/// ```
pub struct Deque<T, P = Doubling> {
    ring: Ring<T>,
    _policy: PhantomData<P>,
}

/// A [`Deque`] which never grows.
pub type FixedDeque<T> = Deque<T, Fixed>;

impl<T, P: CapacityPolicy> Deque<T, P> {
    /// Creates an empty Deque with the default capacity.
    pub fn new() -> Deque<T, P> {
        Deque {
            ring: Ring::new(),
            _policy: PhantomData,
        }
    }

    /// Creates an empty Deque with the provided capacity, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<Deque<T, P>, InvalidCapacity> {
        Ok(Deque {
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

    /// Makes room for one more element, or reports that there is none.
    fn reserve(&mut self) -> Result<(), ContainerFull> {
        if self.ring.is_full() {
            if !P::GROWABLE {
                return Err(ContainerFull { cap: self.cap() });
            }
            self.ring.grow();
        }
        Ok(())
    }

    /// Adds `value` before the first element.
    ///
    /// # Errors
    /// A [`Fixed`] Deque returns [`ContainerFull`] if it has no room left.
    pub fn add_first(&mut self, value: T) -> Result<(), ContainerFull> {
        self.reserve()?;
        self.ring.push_front(value);
        Ok(())
    }

    /// Adds `value` after the last element.
    ///
    /// # Errors
    /// A [`Fixed`] Deque returns [`ContainerFull`] if it has no room left.
    pub fn add_last(&mut self, value: T) -> Result<(), ContainerFull> {
        self.reserve()?;
        self.ring.push_back(value);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T, EmptyCollection> {
        self.ring.pop_front().ok_or(EmptyCollection)
    }

    pub fn remove_last(&mut self) -> Result<T, EmptyCollection> {
        self.ring.pop_back().ok_or(EmptyCollection)
    }

    pub fn get_first(&self) -> Result<&T, EmptyCollection> {
        self.ring.peek_front().ok_or(EmptyCollection)
    }

    pub fn get_last(&self) -> Result<&T, EmptyCollection> {
        self.ring.peek_back().ok_or(EmptyCollection)
    }

    /// Returns an iterator over the Deque's elements, from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T, P: CapacityPolicy> Container for Deque<T, P> {
    fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    fn make_empty(&mut self) {
        self.ring.clear();
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a Deque<T, P> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: CapacityPolicy> Default for Deque<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P> Clone for Deque<T, P> {
    fn clone(&self) -> Self {
        Deque {
            ring: self.ring.clone(),
            _policy: PhantomData,
        }
    }
}

impl<T: Debug, P> Debug for Deque<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.ring.fmt(f)
    }
}
