//! Contiguous collection types, stored in a single boxed allocation.
//!
//! [`Buffer`] is a fixed number of optional slots which only ever grows, by doubling. [`Vector`]
//! tracks a length over a Buffer and is the growable array that the pair-stores, sets and stacks in
//! this crate are built from.

pub mod buffer;
pub mod vector;

#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use vector::Vector;
