use std::fmt::{self, Debug, Formatter};

use super::LinkedList;
use super::list::HEADER;
#[doc(inline)]
pub use crate::util::error::{InvalidIteratorState, NoSuchElement};

/// A type for forward traversal of a [`LinkedList`] which can add and remove elements as it goes.
///
/// A Cursor starts before the first element. [`next`](Cursor::next) moves it onto the following
/// element, [`remove`](Cursor::remove) unlinks the element it is on and steps back onto the
/// previous one, and [`add`](Cursor::add) links a new element after the current one and moves onto
/// it. The Cursor holds the list's only mutable borrow, so nothing else can change the list while
/// it's in use.
///
/// # Examples
/// ```
/// # use adt_collections::collections::linked::LinkedList;
/// let mut list: LinkedList<u8> = (1..=5).collect();
/// let mut cursor = list.cursor();
/// while cursor.has_next() {
///     if *cursor.next().unwrap() % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
/// cursor.add(6);
/// assert!(list.iter().eq(&[1, 3, 5, 6]));
/// ```
pub struct Cursor<'a, T> {
    list: &'a mut LinkedList<T>,
    current: usize,
    removable: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>) -> Cursor<'a, T> {
        Cursor {
            list,
            current: HEADER,
            removable: false,
        }
    }

    /// Returns true if there is an element after the Cursor's position.
    pub fn has_next(&self) -> bool {
        self.list.next_of(self.current).is_some()
    }

    /// Moves the Cursor onto the next element, returning a mutable reference to it.
    pub fn next(&mut self) -> Result<&mut T, NoSuchElement> {
        let next = self.list.next_of(self.current).ok_or(NoSuchElement)?;
        self.current = next;
        self.removable = true;
        self.list.value_mut(next).ok_or(NoSuchElement)
    }

    /// Returns a reference to the next element without moving the Cursor.
    pub fn peek_next(&self) -> Option<&T> {
        self.list.value(self.list.next_of(self.current)?)
    }

    /// Removes the element that the Cursor is on (the last one returned by
    /// [`next`](Cursor::next) or added by [`add`](Cursor::add)), moving the Cursor back onto the
    /// element before it.
    ///
    /// # Errors
    /// Returns [`InvalidIteratorState`] if the Cursor hasn't moved onto an element yet, or if that
    /// element has already been removed.
    pub fn remove(&mut self) -> Result<T, InvalidIteratorState> {
        if !self.removable {
            return Err(InvalidIteratorState);
        }
        let prev = self.list.nodes[self.current].prev;
        let value = self.list.unlink(self.current).ok_or(InvalidIteratorState)?;
        self.current = prev;
        self.removable = false;
        Ok(value)
    }

    /// Inserts `value` directly after the Cursor's position and moves the Cursor onto it.
    pub fn add(&mut self, value: T) {
        self.current = self.list.link_after(self.current, value);
        self.removable = true;
    }

    /// Returns a reference to the list that the Cursor is traversing.
    pub fn list(&self) -> &LinkedList<T> {
        self.list
    }
}

impl<'a, T: Debug> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("list", &self.list)
            .field("current", &self.list.value(self.current))
            .finish()
    }
}
