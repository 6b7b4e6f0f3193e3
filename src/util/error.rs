//! Error types shared by every collection in this crate.
//!
//! Each condition is its own struct (a ZST where there's nothing more to say), so that methods can
//! declare exactly what they might fail with. Where a method can fail in more than one way, the
//! structs are grouped into an enum. [`ContainerError`] accepts all of them, for callers that would
//! rather use `?` than match on specifics.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A collection was asked to allocate zero slots. Every fixed-capacity collection needs at least
/// one.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity {cap} is invalid, a capacity of at least 1 is required!")]
pub struct InvalidCapacity {
    pub cap: usize,
}

/// A [`Buffer`](crate::collections::contiguous::Buffer) was asked to resize to fewer slots than it
/// already has.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to resize buffer with capacity {cap} to smaller capacity {requested}!")]
pub struct ShrinkingResize {
    pub cap: usize,
    pub requested: usize,
}

/// A value was refused by the admission predicate of a constrained collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Value rejected by the collection's constraint!")]
pub struct RejectedValue;

/// Any of the ways that an argument can be unacceptable to a collection.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    Capacity(InvalidCapacity),
    Shrink(ShrinkingResize),
    Rejected(RejectedValue),
}

/// An element was requested from a collection that doesn't contain any.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyCollection;

/// A fixed-capacity collection has no room left for another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerFull {
    pub cap: usize,
}

impl Display for ContainerFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection with fixed capacity {} is full!", self.cap)
    }
}

impl Error for ContainerFull {}

/// A key fell outside the valid range of a direct-indexed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKey {
    pub key: usize,
    pub range: usize,
}

impl Display for InvalidKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} is outside of the valid range 0..{}!", self.key, self.range)
    }
}

impl Error for InvalidKey {}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no element to remove, call next first!")]
pub struct InvalidIteratorState;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no next element!")]
pub struct NoSuchElement;

/// The ways that pushing onto a [`Stack`](crate::collections::circular::Stack) can fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    Full(ContainerFull),
    Rejected(RejectedValue),
}

/// Every error produced by this crate's collections.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    InvalidArgument(InvalidArgument),
    EmptyCollection(EmptyCollection),
    ContainerFull(ContainerFull),
    InvalidKey(InvalidKey),
    InvalidIteratorState(InvalidIteratorState),
    NoSuchElement(NoSuchElement),
}

impl From<InvalidCapacity> for ContainerError {
    fn from(value: InvalidCapacity) -> Self {
        ContainerError::InvalidArgument(value.into())
    }
}

impl From<ShrinkingResize> for ContainerError {
    fn from(value: ShrinkingResize) -> Self {
        ContainerError::InvalidArgument(value.into())
    }
}

impl From<RejectedValue> for ContainerError {
    fn from(value: RejectedValue) -> Self {
        ContainerError::InvalidArgument(value.into())
    }
}

impl From<PushError> for ContainerError {
    fn from(value: PushError) -> Self {
        match value {
            PushError::Full(full) => full.into(),
            PushError::Rejected(rejected) => rejected.into(),
        }
    }
}
