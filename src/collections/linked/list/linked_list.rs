use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{HEADER, Iter, Node};
use crate::collections::contiguous::Vector;
use crate::collections::linked::cursor::Cursor;
use crate::collections::traits::Container;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;

/// A singly linked list with a header node. See also: [`Cursor`] for traversal that can insert and
/// remove elements along the way.
///
/// Nodes are stored in an arena (a [`Vector`]) and refer to each other by index, with index 0
/// always holding the header. Unlinked nodes are recycled by later insertions, so the arena only
/// grows when the list is longer than it has ever been.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get_first/last` | `O(1)` |
/// | `add_first/last` | `O(1)`* |
/// | `remove_first/last` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* Unless the arena has to grow, see [`Vector::push`].
///
/// # Examples
/// ```
/// # use adt_collections::collections::linked::LinkedList;
/// let mut list = LinkedList::new();
/// list.add_last(2);
/// list.add_last(3);
/// list.add_first(1);
/// assert!(list.iter().eq(&[1, 2, 3]));
/// assert_eq!(list.remove_last(), Ok(3));
/// assert_eq!(list.get_last(), Ok(&2));
/// ```
pub struct LinkedList<T> {
    pub(crate) nodes: Vector<Node<T>>,
    pub(crate) free: Vector<usize>,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        let mut nodes = Vector::with_cap(1);
        nodes.push(Node::header());
        LinkedList {
            nodes,
            free: Vector::new(),
            tail: HEADER,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements, which is exactly when the tail is the
    /// header.
    pub const fn is_empty(&self) -> bool {
        self.tail == HEADER
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn add_first(&mut self, value: T) {
        self.link_after(HEADER, value);
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn add_last(&mut self, value: T) {
        self.link_after(self.tail, value);
    }

    /// Removes the first element from the list and returns it.
    pub fn remove_first(&mut self) -> Result<T, EmptyCollection> {
        let first = self.nodes[HEADER].next.ok_or(EmptyCollection)?;
        self.unlink(first).ok_or(EmptyCollection)
    }

    /// Removes the last element from the list and returns it.
    pub fn remove_last(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        self.unlink(self.tail).ok_or(EmptyCollection)
    }

    /// Returns a reference to the first element in the list.
    pub fn get_first(&self) -> Result<&T, EmptyCollection> {
        let first = self.nodes[HEADER].next.ok_or(EmptyCollection)?;
        self.value(first).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the first element in the list.
    pub fn get_first_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        let first = self.nodes[HEADER].next.ok_or(EmptyCollection)?;
        self.value_mut(first).ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element in the list.
    pub fn get_last(&self) -> Result<&T, EmptyCollection> {
        self.value(self.tail).ok_or(EmptyCollection)
    }

    /// Returns a mutable reference to the last element in the list.
    pub fn get_last_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.value_mut(self.tail).ok_or(EmptyCollection)
    }

    /// Returns a [`Cursor`] positioned before the first element of the list.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns an iterator over all elements in the LinkedList, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a mutable reference to the first element matching `predicate`.
    pub fn find_mut<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> Option<&mut T> {
        let mut index = self.next_of(HEADER);
        while let Some(current) = index {
            if self.value(current).is_some_and(&mut predicate) {
                return self.value_mut(current);
            }
            index = self.next_of(current);
        }
        None
    }

    /// Removes and drops every element, resetting the arena to just the header.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::header());
        self.free.clear();
        self.tail = HEADER;
        self.len = 0;
    }

    pub(crate) fn value(&self, index: usize) -> Option<&T> {
        self.nodes.get(index)?.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self, index: usize) -> Option<&mut T> {
        self.nodes.get_mut(index)?.value.as_mut()
    }

    pub(crate) fn next_of(&self, index: usize) -> Option<usize> {
        self.nodes.get(index)?.next
    }

    /// Creates a node holding `value` directly after the node at `at`, returning the new node's
    /// index.
    pub(crate) fn link_after(&mut self, at: usize, value: T) -> usize {
        let next = self.nodes[at].next;
        let node = Node::new(value, next, at);

        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        };

        self.nodes[at].next = Some(index);
        match next {
            Some(next) => self.nodes[next].prev = index,
            None => self.tail = index,
        }
        self.len += 1;
        index
    }

    /// Removes the node at `index` from the chain, returning its value. The slot is kept for
    /// reuse.
    pub(crate) fn unlink(&mut self, index: usize) -> Option<T> {
        if index == HEADER || self.nodes.get(index)?.value.is_none() {
            return None;
        }

        let Node { value, next, prev } = mem::replace(&mut self.nodes[index], Node::header());
        self.nodes[prev].next = next;
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        self.free.push(index);
        self.len -= 1;
        value
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if the LinkedList contains an element equal to the provided one.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Container for LinkedList<T> {
    fn is_empty(&self) -> bool {
        self.tail == HEADER
    }

    fn make_empty(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Clones the elements in order. The copy's arena is compact, however fragmented this one's is.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "({first:?})")?;
        }
        for item in iter {
            write!(f, " -> ({item:?})")?;
        }
        Ok(())
    }
}
