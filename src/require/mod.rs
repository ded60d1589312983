//! Argument validation helpers.
//!
//! These guards fail fast on invalid arguments and hand the value back
//! unchanged when it passes, so they can be chained at the top of an
//! operation before any laziness begins:
//!
//! - [`Ensure::ensure`]: a custom predicate
//! - [`Ensure::ensure_between_inclusive`]: `min <= value <= max`
//! - [`Ensure::ensure_greater_than`]: `value > other`
//! - [`Ensure::ensure_less_than`]: `value < other`
//! - [`EnsureNotNull::ensure_not_null`]: an `Option` must be `Some`
//!
//! # Examples
//!
//! ```rust
//! use chains::require::{Ensure, EnsureNotNull};
//!
//! let size = 3_usize
//!     .ensure(|size| *size > 0, "size", "Must be a positive integer.")
//!     .and_then(|size| size.ensure_between_inclusive(1, 10, "size"));
//! assert_eq!(size, Ok(3));
//!
//! let missing: Option<i32> = None;
//! assert!(missing.ensure_not_null("selector").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::error::ArgumentError;
use crate::trace::trace_event;

const ARGUMENT_TOO_SMALL: &str = "Given argument was less than the specified minimum of";
const ARGUMENT_TOO_LARGE: &str = "Given argument was greater than the specified maximum of";

fn reject(error: ArgumentError) -> ArgumentError {
    trace_event!(debug, parameter = error.name(), "argument rejected");
    error
}

fn too_small<T: Debug, C: Display>(value: &T, minimum: &C, name: &'static str) -> ArgumentError {
    reject(ArgumentError::OutOfRange {
        name,
        value: format!("{value:?}"),
        message: format!("{ARGUMENT_TOO_SMALL} {minimum}."),
    })
}

fn too_large<T: Debug, C: Display>(value: &T, maximum: &C, name: &'static str) -> ArgumentError {
    reject(ArgumentError::OutOfRange {
        name,
        value: format!("{value:?}"),
        message: format!("{ARGUMENT_TOO_LARGE} {maximum}."),
    })
}

/// Guard methods available on every sized value.
///
/// Values that cannot be compared with the bound (for example `NaN`) are
/// rejected rather than let through.
pub trait Ensure: Sized {
    /// Returns `self` if `requirement` holds, otherwise
    /// [`ArgumentError::Invalid`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Invalid`] when the requirement is not met.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::require::Ensure;
    ///
    /// assert!("hello".ensure(|text| !text.is_empty(), "text", "Must not be empty.").is_ok());
    /// assert!(0.ensure(|size| *size > 0, "size", "Must be a positive integer.").is_err());
    /// ```
    fn ensure<P>(self, requirement: P, name: &'static str, message: &str) -> Result<Self, ArgumentError>
    where
        P: FnOnce(&Self) -> bool,
    {
        if requirement(&self) {
            Ok(self)
        } else {
            Err(reject(ArgumentError::Invalid {
                name,
                message: message.to_string(),
            }))
        }
    }

    /// Returns `self` if `min <= self <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::OutOfRange`] naming the violated bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::require::Ensure;
    ///
    /// assert_eq!(10.ensure_between_inclusive(0, 10, "value"), Ok(10));
    /// assert!(11.ensure_between_inclusive(0, 10, "value").is_err());
    /// ```
    fn ensure_between_inclusive<C>(self, min: C, max: C, name: &'static str) -> Result<Self, ArgumentError>
    where
        Self: PartialOrd<C> + Debug,
        C: Display,
    {
        match self.partial_cmp(&min) {
            Some(Ordering::Less) | None => return Err(too_small(&self, &min, name)),
            Some(_) => {}
        }
        match self.partial_cmp(&max) {
            Some(Ordering::Greater) | None => Err(too_large(&self, &max, name)),
            Some(_) => Ok(self),
        }
    }

    /// Returns `self` if `self > other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::OutOfRange`] when `self <= other`.
    fn ensure_greater_than<C>(self, other: C, name: &'static str) -> Result<Self, ArgumentError>
    where
        Self: PartialOrd<C> + Debug,
        C: Display,
    {
        if self.partial_cmp(&other) == Some(Ordering::Greater) {
            Ok(self)
        } else {
            Err(too_small(&self, &other, name))
        }
    }

    /// Returns `self` if `self < other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::OutOfRange`] when `self >= other`.
    fn ensure_less_than<C>(self, other: C, name: &'static str) -> Result<Self, ArgumentError>
    where
        Self: PartialOrd<C> + Debug,
        C: Display,
    {
        if self.partial_cmp(&other) == Some(Ordering::Less) {
            Ok(self)
        } else {
            Err(too_large(&self, &other, name))
        }
    }
}

impl<T> Ensure for T {}

/// Null guard for values that may be absent.
pub trait EnsureNotNull<T> {
    /// Unwraps a present value.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Null`] naming the parameter when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::require::EnsureNotNull;
    ///
    /// assert_eq!(Some("Hello, world!").ensure_not_null("expected"), Ok("Hello, world!"));
    /// ```
    fn ensure_not_null(self, name: &'static str) -> Result<T, ArgumentError>;
}

impl<T> EnsureNotNull<T> for Option<T> {
    fn ensure_not_null(self, name: &'static str) -> Result<T, ArgumentError> {
        self.ok_or_else(|| reject(ArgumentError::Null { name }))
    }
}
