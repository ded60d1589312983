//! Overflow-checked products.
//!
//! [`Multiplicative`] abstracts over what a product needs: a multiplicative
//! identity and a multiplication that reports overflow. Integers use their
//! `checked_mul`; floats never fail because overflow saturates to infinity.
//! With the `decimal` feature, `rust_decimal::Decimal` uses its own
//! `checked_mul` and reports overflow like the integers.
//! `Option<T>` multiplies its present values and treats `None` as absent, so
//! a product over `Option`s skips the `None` elements.

use crate::error::OverflowError;
use crate::trace::trace_event;

/// A type with a multiplicative identity and checked multiplication.
///
/// # Laws
///
/// Whenever `checked_multiply` succeeds:
///
/// ```text
/// T::one().checked_multiply(a) == Some(a)
/// a.checked_multiply(T::one()) == Some(a)
/// ```
///
/// # Examples
///
/// ```rust
/// use chains::reduce::Multiplicative;
///
/// assert_eq!(i32::MAX.checked_multiply(2), None);
/// assert_eq!(f32::MAX.checked_multiply(2.0), Some(f32::INFINITY));
/// assert_eq!(Some(3).checked_multiply(None), Some(Some(3)));
/// ```
pub trait Multiplicative: Sized {
    /// The multiplicative identity.
    fn one() -> Self;

    /// Multiplies, returning `None` on overflow.
    fn checked_multiply(self, other: Self) -> Option<Self>;
}

macro_rules! impl_multiplicative_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Multiplicative for $integer {
                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_multiply(self, other: Self) -> Option<Self> {
                    self.checked_mul(other)
                }
            }
        )*
    };
}

macro_rules! impl_multiplicative_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Multiplicative for $float {
                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn checked_multiply(self, other: Self) -> Option<Self> {
                    Some(self * other)
                }
            }
        )*
    };
}

impl_multiplicative_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_multiplicative_for_float!(f32, f64);

#[cfg(feature = "decimal")]
impl Multiplicative for rust_decimal::Decimal {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn checked_multiply(self, other: Self) -> Option<Self> {
        self.checked_mul(other)
    }
}

impl<T: Multiplicative> Multiplicative for Option<T> {
    fn one() -> Self {
        Some(T::one())
    }

    fn checked_multiply(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Some(left), Some(right)) => left.checked_multiply(right).map(Some),
            (Some(value), None) | (None, Some(value)) => Some(Some(value)),
            (None, None) => Some(None),
        }
    }
}

/// Multiplies every value, starting from [`Multiplicative::one`].
pub(super) fn checked_product<I>(
    mut values: I,
    operation: &'static str,
) -> Result<I::Item, OverflowError>
where
    I: Iterator,
    I::Item: Multiplicative,
{
    values
        .try_fold(<I::Item as Multiplicative>::one(), Multiplicative::checked_multiply)
        .ok_or_else(|| {
            trace_event!(debug, operation, "product overflowed");
            OverflowError { operation }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], 6)]
    #[case(vec![], 1)]
    #[case(vec![7], 7)]
    #[case(vec![-2, 3, 0], 0)]
    fn test_integer_product(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(checked_product(values.into_iter(), "test"), Ok(expected));
    }

    #[rstest]
    fn test_i32_overflow() {
        assert_eq!(
            checked_product([i32::MAX, 10].into_iter(), "checked_product"),
            Err(OverflowError {
                operation: "checked_product"
            })
        );
    }

    #[rstest]
    fn test_i64_overflow() {
        assert!(checked_product([i64::MAX, 10].into_iter(), "test").is_err());
    }

    #[rstest]
    fn test_u8_overflow_detected_at_boundary() {
        assert_eq!(checked_product([15_u8, 17].into_iter(), "test"), Ok(255));
        assert!(checked_product([16_u8, 16].into_iter(), "test").is_err());
    }

    #[rstest]
    fn test_float_product_saturates() {
        assert_eq!(
            checked_product([f64::MAX, 10.0].into_iter(), "test"),
            Ok(f64::INFINITY)
        );
        assert_eq!(checked_product([1.0_f32, 2.0, 3.0].into_iter(), "test"), Ok(6.0));
    }

    #[rstest]
    fn test_optional_product_skips_none() {
        let values = vec![Some(1), None, Some(2), None, Some(3), None];
        assert_eq!(checked_product(values.into_iter(), "test"), Ok(Some(6)));
    }

    #[rstest]
    fn test_optional_product_of_empty_is_one() {
        assert_eq!(
            checked_product(std::iter::empty::<Option<i64>>(), "test"),
            Ok(Some(1))
        );
    }

    #[rstest]
    fn test_optional_product_of_only_none_is_one() {
        assert_eq!(
            checked_product([None::<i32>, None].into_iter(), "test"),
            Ok(Some(1))
        );
    }

    #[rstest]
    fn test_optional_overflow() {
        assert!(checked_product([Some(i32::MAX), None, Some(10)].into_iter(), "test").is_err());
    }
}
