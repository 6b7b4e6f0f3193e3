//! Sequence collections: [`Stack`], [`Queue`] and [`Deque`].
//!
//! Queues and deques keep their elements in a circular array, addressed by a `front` and `back`
//! index that wrap around at the capacity, so that both ends can be used in `O(1)` without ever
//! shifting elements. Stacks only ever use one end and sit on a [`Vector`](super::contiguous::Vector)
//! instead.
//!
//! Rather than separate fixed and dynamic types, each collection takes a [`CapacityPolicy`]:
//! [`Fixed`] reports [`ContainerFull`](crate::error::ContainerFull) when there's no room left,
//! while [`Doubling`] grows the underlying [`Buffer`](super::contiguous::Buffer) instead and never
//! reports full. [`Stack`] can additionally be given an [`Admit`] predicate to restrict the values
//! it accepts.

mod deque;
mod policy;
mod queue;
mod ring;
mod stack;
mod tests;

pub use deque::*;
pub use policy::*;
pub use queue::*;
pub use ring::Iter;
pub use stack::*;
