//! Error handling primitives for the D7S driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    ///
    /// For reads this is the error of the last attempt once the retry budget is spent.
    Interface(E),
    /// The provided configuration parameters are invalid.
    InvalidConfig,
    /// A register held a value outside its documented encoding.
    UnexpectedValue(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
