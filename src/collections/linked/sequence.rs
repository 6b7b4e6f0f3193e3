use std::fmt::{self, Debug, Formatter};

use super::LinkedList;
use super::list::Iter;
use crate::collections::traits::Container;
use crate::util::error::EmptyCollection;

/// A last-in first-out collection, based on [`LinkedList<T>`]. The top of the stack is the front
/// of the list, so every operation is `O(1)` and the stack never reports full.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedStack<T> {
    list: LinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> LinkedStack<T> {
        LinkedStack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.list.add_first(value);
    }

    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.remove_first()
    }

    pub fn top(&self) -> Result<&T, EmptyCollection> {
        self.list.get_first()
    }

    /// Returns an iterator over the stack's elements, from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Container for LinkedStack<T> {
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn make_empty(&mut self) {
        self.list.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A first-in first-out collection, based on [`LinkedList<T>`]. Elements join at the back of the
/// list and leave from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    list: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> LinkedQueue<T> {
        LinkedQueue {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.add_last(value);
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.list.remove_first()
    }

    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.list.get_first()
    }

    /// Returns an iterator over the queue's elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Container for LinkedQueue<T> {
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn make_empty(&mut self) {
        self.list.clear();
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
