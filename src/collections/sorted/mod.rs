//! Sorted associative collections. Like those in [`associative`](super::associative), these
//! store their entries in a [`Vector`](super::contiguous::Vector), but keep it in ascending key
//! order so that lookups can bisect instead of scanning.
//!
//! - [`SortedArrayDictionary`]: a multimap.
//! - [`SortedArrayMap`]: one value per key.
//! - [`SortedArraySet`]: distinct elements, with set algebra done by merging in `O(n + m)`.
//!
//! Keys must be [`Ord`]. Insertion and removal shift the entries after the affected one, so both
//! take `O(n)`, but keys can always be read back in order without any sorting.

mod dictionary;
mod map;
mod merge;
mod search;
mod set;
mod tests;

pub use dictionary::*;
pub use map::*;
pub use merge::*;
pub(crate) use search::*;
pub use set::*;
