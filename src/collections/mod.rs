//! Various general-purpose collection types.
//!
//! # Layout
//! Collections are grouped by how they store their elements rather than by which abstract data
//! type they implement:
//! - [`contiguous`]: the growable [`Buffer`](contiguous::Buffer) and [`Vector`](contiguous::Vector)
//!   that everything array-backed is built from.
//! - [`circular`]: [`Stack`](circular::Stack), [`Queue`](circular::Queue) and
//!   [`Deque`](circular::Deque) over circular arrays.
//! - [`linked`]: [`LinkedList`](linked::LinkedList), its [`Cursor`](linked::Cursor) and the stack
//!   and queue built on it.
//! - [`associative`]: unsorted pair-stores searched linearly.
//! - [`sorted`]: pair-stores kept in key order and searched by bisection.
//! - [`hash`]: the chained [`HashTable`](hash::HashTable) and the direct-indexed
//!   [`DirectTable`](hash::DirectTable).
//!
//! Every collection implements [`Container`](traits::Container).

#[cfg(feature = "associative")]
pub mod associative;
#[cfg(feature = "circular")]
pub mod circular;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "sorted")]
pub mod sorted;
#[cfg(feature = "traits")]
pub mod traits;
