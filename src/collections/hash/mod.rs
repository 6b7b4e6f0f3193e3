//! Hash-indexed collections.
//!
//! [`HashTable`] keeps a fixed number of buckets, each holding a [`LinkedList`] of the entries
//! whose keys hash to it. It never rehashes, so [`load_factor`](HashTable::load_factor) can go
//! well past 1 if it's created too small.
//!
//! [`DirectTable`] skips hashing altogether: keys are `usize`s in `0..dim` and index a
//! [`Buffer`](super::contiguous::Buffer) directly.
//!
//! [`LinkedList`]: super::linked::LinkedList

mod direct;
mod iter;
mod table;

pub use direct::*;
pub use iter::*;
pub use table::*;
