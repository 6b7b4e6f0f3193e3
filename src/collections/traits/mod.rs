//! Traits describing the capabilities that collections share.

mod container;
pub mod set;

#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use set::Set;
