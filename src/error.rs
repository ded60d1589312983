//! Error types for sequence operations.
//!
//! Every fallible operation in this crate reports one of three conditions:
//!
//! - [`ArgumentError`]: an argument was rejected when the operation was called
//! - [`EmptySequenceError`]: the operation needs at least one element
//! - [`OverflowError`]: checked arithmetic overflowed while reducing
//!
//! [`ChainError`] unifies them for callers that want a single error type.
//!
//! # Examples
//!
//! ```rust
//! use chains::error::ArgumentError;
//!
//! let error = ArgumentError::Null { name: "selector" };
//! assert_eq!(format!("{error}"), "Value cannot be null. (Parameter 'selector')");
//! ```

use std::fmt;

/// An argument was rejected before any element was read.
///
/// # Examples
///
/// ```rust
/// use chains::error::ArgumentError;
///
/// let error = ArgumentError::Invalid {
///     name: "size",
///     message: "Must be a positive integer.".to_string(),
/// };
/// assert_eq!(error.name(), "size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A required value was absent.
    Null {
        /// The name of the rejected parameter.
        name: &'static str,
    },
    /// A value fell outside its permitted range.
    OutOfRange {
        /// The name of the rejected parameter.
        name: &'static str,
        /// The rejected value, rendered with `Debug`.
        value: String,
        /// Which bound was violated.
        message: String,
    },
    /// A value failed a custom requirement.
    Invalid {
        /// The name of the rejected parameter.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl ArgumentError {
    /// Returns the name of the rejected parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null { name } | Self::OutOfRange { name, .. } | Self::Invalid { name, .. } => {
                name
            }
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null { name } => {
                write!(formatter, "Value cannot be null. (Parameter '{name}')")
            }
            Self::OutOfRange {
                name,
                value,
                message,
            } => write!(
                formatter,
                "{message} (Parameter '{name}', actual value was {value})"
            ),
            Self::Invalid { name, message } => {
                write!(formatter, "{message} (Parameter '{name}')")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

/// The operation has no meaningful result for an empty sequence.
///
/// Returned by operations such as `except_first`, where "no elements" is
/// distinct from "no elements remain after removal".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the operation that required a non-empty sequence.
    pub operation: &'static str,
}

impl fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: sequence contains no elements", self.operation)
    }
}

impl std::error::Error for EmptySequenceError {}

/// Checked arithmetic overflowed while reducing a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowError {
    /// The name of the operation that overflowed.
    pub operation: &'static str,
}

impl fmt::Display for OverflowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: arithmetic operation resulted in an overflow",
            self.operation
        )
    }
}

impl std::error::Error for OverflowError {}

/// Any error produced by this crate.
///
/// # Examples
///
/// ```rust
/// use chains::error::{ChainError, OverflowError};
///
/// let error: ChainError = OverflowError { operation: "checked_product" }.into();
/// assert!(matches!(error, ChainError::Overflow(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// An argument was rejected.
    Argument(ArgumentError),
    /// The sequence was empty.
    EmptySequence(EmptySequenceError),
    /// Checked arithmetic overflowed.
    Overflow(OverflowError),
}

impl fmt::Display for ChainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(error) => write!(formatter, "{error}"),
            Self::EmptySequence(error) => write!(formatter, "{error}"),
            Self::Overflow(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Argument(error) => Some(error),
            Self::EmptySequence(error) => Some(error),
            Self::Overflow(error) => Some(error),
        }
    }
}

impl From<ArgumentError> for ChainError {
    fn from(error: ArgumentError) -> Self {
        Self::Argument(error)
    }
}

impl From<EmptySequenceError> for ChainError {
    fn from(error: EmptySequenceError) -> Self {
        Self::EmptySequence(error)
    }
}

impl From<OverflowError> for ChainError {
    fn from(error: OverflowError) -> Self {
        Self::Overflow(error)
    }
}
