//! Error types.
//!
//! Classification is total over the 256 octets, so the only taxonomy error
//! is a broken convergence guarantee. Everything else is input parsing or
//! report I/O.

use crate::core::octet::Octet;
use thiserror::Error;

/// Errors raised while building or rendering the taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Descending through `center` did not reach a root within the cap.
    ///
    /// This means the `center` transform lost its convergence property and
    /// is never tolerated.
    #[error("octet {value} did not converge to a root after {iterations} center steps")]
    NoConvergence {
        /// The octet the descent started from.
        value: Octet,
        /// Number of steps taken before giving up.
        iterations: u8,
    },

    /// A byte literal could not be parsed.
    #[error(transparent)]
    ParseOctet(#[from] ParseOctetError),

    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report to JSON failed.
    #[cfg(feature = "serde")]
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error when parsing an [`Octet`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOctetError {
    /// No digits after an optional radix prefix.
    #[error("empty byte literal")]
    Empty,

    /// Digits are not valid for the radix.
    #[error("invalid byte literal '{input}' (expected decimal, 0x hex or 0b binary)")]
    Invalid {
        /// The rejected input.
        input: String,
    },

    /// The literal is larger than 255.
    #[error("byte literal {value} is out of range 0..=255")]
    OutOfRange {
        /// The parsed value.
        value: u32,
    },
}

/// Result alias for taxonomy operations.
pub type Result<T> = core::result::Result<T, TaxonomyError>;
