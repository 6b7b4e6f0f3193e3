//! A module containing [`Vector`] and associated types.
//!
//! The other included types are iterators: [`Iter`] and [`IterMut`] for borrowed iteration and
//! [`IntoIter`] for owned iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
