/// The index of the header node, which exists for the whole life of a list and never holds a
/// value.
pub(crate) const HEADER: usize = 0;

/// A single node in a [`LinkedList`](super::LinkedList)'s arena.
///
/// `next` is the forward link that traversal follows. `prev` is only kept so that the last node
/// can be unlinked without walking the whole list; nothing iterates over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub value: Option<T>,
    pub next: Option<usize>,
    pub prev: usize,
}

impl<T> Node<T> {
    pub const fn header() -> Node<T> {
        Node {
            value: None,
            next: None,
            prev: HEADER,
        }
    }

    pub const fn new(value: T, next: Option<usize>, prev: usize) -> Node<T> {
        Node {
            value: Some(value),
            next,
            prev,
        }
    }
}
