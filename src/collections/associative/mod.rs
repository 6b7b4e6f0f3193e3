//! Unsorted associative collections, stored as a [`Vector`](super::contiguous::Vector) of
//! [`Pair`]s and searched linearly.
//!
//! - [`ArrayDictionary`]: a multimap, each key holds every value inserted under it, in order.
//! - [`ArrayMap`]: one value per key, `put` replaces.
//! - [`ArraySet`]: distinct elements, implementing [`Set`](super::traits::Set).
//!
//! Lookups take any borrowed form of the key, the same as [`std::collections::HashMap`].

mod dictionary;
mod map;
mod pair;
mod set;

pub use dictionary::*;
pub use map::*;
pub use pair::*;
pub use set::*;
