use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::marker::PhantomData;

use super::{Admit, CapacityPolicy, DEFAULT_CAP, Doubling, Fixed, Unconstrained};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter as VectorIter;
use crate::collections::traits::Container;
use crate::util::error::{ContainerFull, EmptyCollection, InvalidCapacity, PushError, RejectedValue};

/// A last-in first-out collection, based on [`Vector<T>`].
///
/// A [`Fixed`] Stack is full once it holds as many elements as its capacity, a [`Doubling`] one
/// grows instead. Every Stack also has an [`Admit`] predicate that each pushed value is checked
/// against before anything else happens. The default, [`Unconstrained`], accepts everything.
///
/// # Examples
/// ```
/// # use adt_collections::collections::circular::FixedStack;
/// # use adt_collections::error::PushError;
/// let mut stack: FixedStack<u8> = FixedStack::with_cap(2).unwrap();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(matches!(stack.push(3), Err(PushError::Full(_))));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.top(), Ok(&1));
/// ```
pub struct Stack<T, P = Doubling, A = Unconstrained> {
    items: Vector<T>,
    admit: A,
    _policy: PhantomData<P>,
}

/// A [`Stack`] which never grows.
pub type FixedStack<T> = Stack<T, Fixed>;

impl<T, P: CapacityPolicy> Stack<T, P> {
    /// Creates an empty, unconstrained Stack with the default capacity.
    pub fn new() -> Stack<T, P> {
        Stack::with_constraint(Unconstrained)
    }

    /// Creates an empty, unconstrained Stack with the provided capacity, which must be at least 1.
    pub fn with_cap(cap: usize) -> Result<Stack<T, P>, InvalidCapacity> {
        Stack::with_cap_and_constraint(cap, Unconstrained)
    }
}

impl<T, P: CapacityPolicy, A: Admit<T>> Stack<T, P, A> {
    /// Creates an empty Stack with the default capacity, which only accepts values admitted by
    /// `admit`.
    pub fn with_constraint(admit: A) -> Stack<T, P, A> {
        Stack {
            items: Vector::with_cap(DEFAULT_CAP),
            admit,
            _policy: PhantomData,
        }
    }

    /// Creates an empty Stack with the provided capacity, which only accepts values admitted by
    /// `admit`.
    pub fn with_cap_and_constraint(cap: usize, admit: A) -> Result<Stack<T, P, A>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }
        Ok(Stack {
            items: Vector::with_cap(cap),
            admit,
            _policy: PhantomData,
        })
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.items.cap()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Errors
    /// Returns [`PushError::Rejected`] if the Stack's constraint doesn't admit `value`, or
    /// [`PushError::Full`] if the Stack is [`Fixed`] and already at capacity.
    ///
    /// # Panics
    /// Panics if a [`Doubling`] Stack's capacity would overflow [`usize`].
    pub fn push(&mut self, value: T) -> Result<(), PushError> {
        if !self.admit.admits(&value) {
            return Err(RejectedValue.into());
        }
        if !P::GROWABLE && self.items.len() == self.items.cap() {
            return Err(ContainerFull { cap: self.cap() }.into());
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the element on top of the Stack.
    pub fn pop(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element on top of the Stack, without removing it.
    pub fn top(&self) -> Result<&T, EmptyCollection> {
        self.items.last().ok_or(EmptyCollection)
    }

    /// Returns an iterator over the Stack's elements, from top to bottom.
    pub fn iter(&self) -> Rev<VectorIter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T, P, A> Container for Stack<T, P, A> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn make_empty(&mut self) {
        self.items.clear();
    }
}

impl<'a, T, P: CapacityPolicy, A: Admit<T>> IntoIterator for &'a Stack<T, P, A> {
    type Item = &'a T;

    type IntoIter = Rev<VectorIter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: CapacityPolicy> Default for Stack<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P, A: Clone> Clone for Stack<T, P, A> {
    fn clone(&self) -> Self {
        Stack {
            items: self.items.clone(),
            admit: self.admit.clone(),
            _policy: PhantomData,
        }
    }
}

impl<T: Debug, P, A> Debug for Stack<T, P, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}
