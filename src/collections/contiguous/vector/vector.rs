use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut};
use crate::collections::contiguous::Buffer;
use crate::collections::traits::Container;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, based on [`Buffer<T>`].
///
/// The first `len` slots of the Buffer are always occupied and every other slot is always empty.
/// When the Vector runs out of slots it grows with [`Buffer::grow`], so its capacity is always a
/// power of two times whatever it was created with.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `swap_remove` | `O(1)` |
/// | `replace` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Push the provided value onto the end of the Vector, doubling the capacity if required.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec.len(), 6);
    /// assert_eq!(vec.cap(), 8);
    /// assert_eq!(vec[5], 5);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.buf.grow();
        }
        self.buf.put(self.len, value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            self.buf.take(self.len)
        }
    }

    /// Inserts the provided value at the given index, shifting every following element one place
    /// to the right. An index equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert!(vec.iter().eq(&[0, 200, 100, 1, 2, 300]));
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len == self.cap() {
            self.buf.grow();
        }

        self.buf.put(self.len, value);
        // Rotating moves the new value to index and everything after it one slot to the right.
        self.buf.slots[index..=self.len].rotate_right(1);
        self.len += 1;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap,
    /// or returns an [`Err`] if the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let bounds = IndexOutOfBounds {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(bounds);
        }

        self.buf.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.buf.take(self.len).ok_or(bounds)
    }

    /// Removes the element at the provided index by moving the last element into its place. This
    /// doesn't preserve order, but doesn't shift anything either.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.check_index(index);

        self.buf.swap(index, self.len - 1);
        self.remove(self.len - 1)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        mem::replace(&mut self[index], new_value)
    }

    /// Swaps the elements at indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.buf.swap(a, b);
    }

    /// Returns a reference to the element at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf.get(index)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.buf.get_mut(index)
        } else {
            None
        }
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather than
    /// [`None`].
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than [`None`].
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a reference to the first element, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Removes and drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.len = 0;
    }

    /// Returns an iterator over all elements in the Vector, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements in the Vector, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T: PartialEq> Vector<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Container for Vector<T> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn make_empty(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
