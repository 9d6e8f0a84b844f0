use thiserror::Error;

/// Broad classification of a [`BigArrayError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The arguments are inconsistent on their own (bad length, `from > to`, ...).
    InvalidArgument,
    /// The arguments address elements outside an array.
    OutOfRange,
}

/// Errors reported by big array operations.
///
/// All of them are raised before the target is touched, so a failed call
/// leaves every array it was given unmodified.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BigArrayError {
    #[error("invalid length {length}: the maximum is {max}")]
    InvalidLength { length: u64, max: u64 },

    #[error("start index {from} is greater than end index {to}")]
    InvertedRange { from: u64, to: u64 },

    #[error("array lengths differ: {left} != {right}")]
    LengthMismatch { left: u64, right: u64 },

    #[error("cannot preserve {preserve} elements: only {available} are available")]
    PreserveTooLarge { preserve: u64, available: u64 },

    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: u64, length: u64 },

    #[error("range end {end} out of bounds for length {length}")]
    RangeOutOfBounds { end: u64, length: u64 },
}

impl BigArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. }
            | Self::InvertedRange { .. }
            | Self::LengthMismatch { .. }
            | Self::PreserveTooLarge { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } | Self::RangeOutOfBounds { .. } => ErrorKind::OutOfRange,
        }
    }
}

pub type Result<T> = std::result::Result<T, BigArrayError>;
