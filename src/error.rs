//! Argument-contract errors.
//!
//! Malformed format strings are never an error: unrecognized or truncated
//! specifiers degrade to literal output. Only violations of the argument-list
//! contract are reported: the format string demanding an argument that is
//! missing or of the wrong category.

use thiserror::Error;

/// Returned when the argument list does not satisfy the format string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A specifier demanded one more argument than the caller supplied.
    #[error(
        "format string demands argument #{index}, but the argument list has only {index} entries"
    )]
    MissingArgument {
        /// Zero-based position of the argument the specifier tried to consume.
        index: usize,
    },

    /// An argument exists at the demanded position but has the wrong category.
    ///
    /// Integer variants convert freely among themselves (two's-complement
    /// reinterpretation); only string/integer/count category mismatches
    /// reach this variant.
    #[error("argument #{index} has the wrong type: expected {expected}, found {found}")]
    WrongArgumentType {
        /// Zero-based position of the offending argument.
        index: usize,
        /// Category the specifier demanded.
        expected: &'static str,
        /// Category the caller supplied.
        found: &'static str,
    },
}
