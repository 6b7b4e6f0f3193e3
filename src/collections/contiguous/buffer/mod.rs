//! A module containing [`Buffer`], the fixed-size slot array with a single doubling growth path.
//!
//! [`Buffer`] is also re-exported under the parent module.

mod buffer;
mod tests;

pub use buffer::*;
