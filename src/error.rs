use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    /// An edge task could not be spawned.
    #[cfg(all(feature = "pico1", feature = "arm"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// Only `0..=9` can be shown on the matrix.
    #[display("Digit {_0} is out of range 0..=9")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// The status LED pin reported an error.
    #[display("Error setting output state")]
    CannotSetOutputState,
}

#[cfg(all(feature = "pico1", feature = "arm"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
