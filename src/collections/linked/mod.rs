//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`Cursor`] type, with [`LinkedStack`] and [`LinkedQueue`] built on top.

pub mod cursor;
pub mod list;
mod sequence;
mod tests;

#[doc(inline)]
pub use cursor::Cursor;
#[doc(inline)]
pub use list::LinkedList;
pub use sequence::*;
