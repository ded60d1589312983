//! Terminal consumers.
//!
//! These drain a sequence to produce a single value:
//!
//! - [`Reduce::checked_product`] / [`Reduce::checked_product_by`]: the
//!   product of all elements, reporting integer overflow as an error
//! - [`Reduce::to_histogram`]: occurrence counts per distinct element
//!
//! Side effects per element are already covered by [`Iterator::for_each`].
//!
//! # Examples
//!
//! ```rust
//! use chains::reduce::Reduce;
//!
//! assert_eq!([1, 2, 3].into_iter().checked_product(), Ok(6));
//! assert!([i32::MAX, 10].into_iter().checked_product().is_err());
//!
//! let histogram = "hello".chars().to_histogram();
//! assert_eq!(histogram.count(&'l'), 2);
//! ```

mod histogram;
mod product;

pub use histogram::Histogram;
pub use product::Multiplicative;

use std::hash::Hash;

use crate::error::OverflowError;

/// Terminal consumers available on every iterator.
pub trait Reduce: Iterator + Sized {
    /// Multiplies all elements together. An empty sequence yields one.
    ///
    /// `None` elements of an `Option` sequence are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`OverflowError`] if an integer multiplication overflows.
    /// Floating-point products saturate to infinity instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::reduce::Reduce;
    ///
    /// assert_eq!([Some(2), None, Some(5)].into_iter().checked_product(), Ok(Some(10)));
    /// assert_eq!(std::iter::empty::<u64>().checked_product(), Ok(1));
    /// ```
    fn checked_product(self) -> Result<Self::Item, OverflowError>
    where
        Self::Item: Multiplicative,
    {
        product::checked_product(self, "checked_product")
    }

    /// Multiplies the values `selector` projects from every element.
    ///
    /// # Errors
    ///
    /// Returns [`OverflowError`] if an integer multiplication overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::reduce::Reduce;
    ///
    /// let sides = ["ab", "abc", "abcd"];
    /// assert_eq!(sides.into_iter().checked_product_by(str::len), Ok(24));
    /// ```
    fn checked_product_by<T, F>(self, selector: F) -> Result<T, OverflowError>
    where
        T: Multiplicative,
        F: FnMut(Self::Item) -> T,
    {
        product::checked_product(self.map(selector), "checked_product_by")
    }

    /// Counts how many times each distinct element occurs.
    fn to_histogram(self) -> Histogram<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.collect()
    }
}

impl<I: Iterator> Reduce for I {}

static_assertions::assert_impl_all!(Histogram<String>: Send, Sync, Clone, Default);
