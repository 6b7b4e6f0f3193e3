/// The capacity used by sequence collections created without an explicit one.
pub const DEFAULT_CAP: usize = 100;

/// Decides what a sequence collection does when it runs out of room.
pub trait CapacityPolicy {
    /// Whether the collection should grow (true) or report that it is full (false).
    const GROWABLE: bool;
}

/// Never grow: inserting into a full collection fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fixed;

impl CapacityPolicy for Fixed {
    const GROWABLE: bool = false;
}

/// Double the capacity whenever the collection would otherwise be full.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Doubling;

impl CapacityPolicy for Doubling {
    const GROWABLE: bool = true;
}

/// A predicate deciding which values a constrained collection will accept.
///
/// Any `Fn(&T) -> bool` is an Admit.
///
/// # Examples
/// ```
/// # use adt_collections::collections::circular::{Doubling, Stack};
/// let mut stack = Stack::<i32, Doubling, _>::with_constraint(|value: &i32| *value >= 0);
/// assert!(stack.push(3).is_ok());
/// assert!(stack.push(-3).unwrap_err().is_rejected());
/// ```
pub trait Admit<T> {
    fn admits(&self, value: &T) -> bool;
}

/// Accepts every value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unconstrained;

impl<T> Admit<T> for Unconstrained {
    fn admits(&self, _value: &T) -> bool {
        true
    }
}

impl<T, F: Fn(&T) -> bool> Admit<T> for F {
    fn admits(&self, value: &T) -> bool {
        self(value)
    }
}
