use std::fmt::{self, Debug, Formatter};
use std::ops::Range;
use std::{cmp, iter, mem};

use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ShrinkingResize};
use crate::util::result::ResultExtension;

/// The capacity that an empty Buffer grows to.
pub(crate) const MIN_CAP: usize = 1;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// A fixed number of slots, each of which may or may not hold a value.
///
/// A Buffer never tracks which of its slots are occupied, that is left to the collection built on
/// top of it (a length for [`Vector`](super::super::Vector), front and back indices for the circular
/// collections). What it does own is growth: [`grow`](Buffer::grow) is the one place where any
/// array-backed collection in this crate gets more room, and it always doubles.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The capacity of the Buffer.
/// - `m`: The number of slots being relocated.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `put` | `O(1)` |
/// | `take` | `O(1)` |
/// | `grow` | `O(n)` |
/// | `resize` | `O(n)` |
/// | `relocate` | `O(m)` |
/// | `clear` | `O(n)` |
pub struct Buffer<T> {
    pub(crate) slots: Box<[Option<T>]>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with no slots. Memory will be allocated when the Buffer grows.
    pub fn new() -> Buffer<T> {
        Buffer {
            slots: Box::new([]),
        }
    }

    /// Creates a new Buffer with exactly `cap` empty slots.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::Buffer;
    /// let buf: Buffer<u8> = Buffer::with_cap(4);
    /// assert_eq!(buf.cap(), 4);
    /// assert_eq!(buf.get(0), None);
    /// ```
    pub fn with_cap(cap: usize) -> Buffer<T> {
        Buffer {
            slots: empty_slots(cap),
        }
    }

    /// Returns the number of slots in the Buffer.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the value in slot `index`, if the slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Returns a mutable reference to the value in slot `index`, if the slot exists and is
    /// occupied.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Places `value` in slot `index`, returning the previous occupant.
    ///
    /// # Panics
    /// Panics if `index` is not less than the capacity.
    #[track_caller]
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.check_index(index);
        self.slots[index].replace(value)
    }

    /// Removes and returns the value in slot `index`, leaving the slot empty.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Swaps the contents of two slots.
    ///
    /// # Panics
    /// Panics if either index is not less than the capacity.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.slots.swap(a, b);
    }

    /// Moves the contents of the slots in `from` so that they start at `to`, leaving the source
    /// slots empty (unless they are also part of the destination).
    ///
    /// # Panics
    /// Panics if either the source or destination range extends past the capacity.
    #[track_caller]
    pub fn relocate(&mut self, from: Range<usize>, to: usize) {
        if from.is_empty() {
            return;
        }
        self.check_index(from.end - 1);
        self.check_index(to + from.len() - 1);

        let offsets = 0..from.len();
        // Copy in the direction that can't overwrite slots which haven't been moved yet.
        if to > from.start {
            for offset in offsets.rev() {
                let value = self.slots[from.start + offset].take();
                self.slots[to + offset] = value;
            }
        } else {
            for offset in offsets {
                let value = self.slots[from.start + offset].take();
                self.slots[to + offset] = value;
            }
        }
    }

    /// Resizes the Buffer to `new_cap` slots, keeping every slot's contents at the same index.
    ///
    /// A Buffer never shrinks, so requesting fewer slots than it already has is an error.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::Buffer;
    /// let mut buf = Buffer::with_cap(2);
    /// buf.put(1, 'b');
    /// buf.resize(5).unwrap();
    /// assert_eq!(buf.cap(), 5);
    /// assert_eq!(buf.get(1), Some(&'b'));
    /// assert!(buf.resize(3).is_err());
    /// ```
    pub fn resize(&mut self, new_cap: usize) -> Result<(), ShrinkingResize> {
        if new_cap < self.cap() {
            return Err(ShrinkingResize {
                cap: self.cap(),
                requested: new_cap,
            });
        }
        if new_cap > self.cap() {
            self.realloc(new_cap);
        }
        Ok(())
    }

    /// Doubles the capacity of the Buffer (or allocates a single slot for an empty one),
    /// keeping every slot's contents at the same index.
    ///
    /// # Panics
    /// Panics if the doubled capacity overflows [`usize`].
    #[track_caller]
    pub fn grow(&mut self) {
        let doubled = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.realloc(cmp::max(doubled, MIN_CAP));
    }

    /// Empties every slot, dropping their contents. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Returns the raw slots of the Buffer.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Replaces the slots with `new_cap` empty ones and moves the old contents across.
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let old_cap = self.cap();
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));

        for (slot, value) in self.slots.iter_mut().zip(old_slots) {
            *slot = value;
        }

        log::trace!("Reallocated buffer from {old_cap} to {new_cap} slots.");
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.cap() {
            Err(IndexOutOfBounds {
                index,
                len: self.cap(),
            }).throw()
        }
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Buffer {
            slots: self.slots.clone(),
        }
    }
}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}
