#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
#[cfg(feature = "contiguous")]
pub mod result;
