//! Error taxonomy for the arithmetic engine.
//!
//! Every fallible entry point returns [`Result<T, Error>`]. Errors are never
//! retried internally and never leave a destination partially written (see
//! the module docs on [`crate::number`] for the destination-alias-safe
//! discipline).

use std::fmt;

/// The failure taxonomy shared by every operation in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A `Vec` growth could not be satisfied.
    OutOfMemory,
    /// Arguments were well-typed but semantically invalid (e.g. an
    /// unsupported base, or a non-finite float passed to an exact capture).
    InvalidInput,
    /// A divisor, denominator, or modulus was zero.
    DivideByZero,
    /// Textual input did not conform to the parser grammar.
    ParseError,
    /// A narrowing conversion could not represent the value.
    OutOfRange,
    /// An integer-only operation received a non-integer rational.
    TypeMismatch,
    /// A fixed-size output buffer was too small to hold the formatted text.
    BufferTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfMemory => "out of memory",
            Error::InvalidInput => "invalid input",
            Error::DivideByZero => "division by zero",
            Error::ParseError => "parse error",
            Error::OutOfRange => "value out of range",
            Error::TypeMismatch => "operation requires an integer",
            Error::BufferTooSmall => "output buffer too small",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
