//! A from-scratch library of abstract data types: stacks, queues, deques, dictionaries, maps,
//! sets, hash tables and a singly linked list with a cursor.
//!
//! # Purpose
//! These are the textbook containers, written out by hand to understand how each of them actually
//! behaves: amortized doubling, circular index arithmetic, binary search over sorted storage and
//! chained hashing. Nothing here tries to compete with [`std::collections`].
//!
//! # Method
//! Every array-backed type sits on top of [`Buffer`](collections::contiguous::Buffer), a boxed slice
//! of optional slots with a single growth operation (doubling), so that growth behaves identically
//! everywhere. Where the classic designs use an inheritance chain (fixed stack → dynamic stack →
//! constrained stack), the types here are generic over a capacity policy and an admission
//! predicate instead.
//!
//! Linked nodes live in an index arena rather than behind raw pointers, which lets
//! [`Cursor`](collections::linked::Cursor) insert and remove mid-traversal without any `unsafe`.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s with small, strongly typed error structs (see [`error`]),
//! grouped into enums where more than one thing can go wrong. Everything converts into
//! [`ContainerError`](error::ContainerError) for callers who'd rather just use `?`. Indexing with
//! `[]` panics on an out of bounds index, the same as slices do.
//!
//! # Concurrency
//! None of these types synchronize anything. They are all plain owned values, so the borrow
//! checker already keeps mutation exclusive.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
