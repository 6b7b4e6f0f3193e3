use std::error::Error;

/// Turns a collection's typed error into a panic, for the methods that mirror slice behaviour
/// (indexing, `remove`, growth past `usize::MAX`) instead of returning a [`Result`].
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the error's [`Display`](std::fmt::Display)
    /// message. The panic is reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    #[track_caller]
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
