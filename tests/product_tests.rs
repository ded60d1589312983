#![cfg(feature = "reduce")]
//! Unit tests for `Reduce::checked_product` and `Reduce::checked_product_by`.
//!
//! Tests cover:
//! - Products for every numeric type
//! - The multiplicative identity for empty sequences
//! - Overflow reporting for integers
//! - `None` elements being skipped in `Option` sequences

use chains::error::OverflowError;
use chains::reduce::Reduce;
use rstest::rstest;

// =============================================================================
// Per-Type Products
// =============================================================================

macro_rules! product_tests_for {
    ($($numeric:ident),* $(,)?) => {
        $(
            paste::paste! {
                #[rstest]
                fn [<checked_product_ $numeric _multiplies_all_elements>]() {
                    let values: [$numeric; 3] = [1 as $numeric, 2 as $numeric, 3 as $numeric];
                    assert_eq!(values.into_iter().checked_product(), Ok(6 as $numeric));
                }

                #[rstest]
                fn [<checked_product_ $numeric _of_empty_is_one>]() {
                    assert_eq!(std::iter::empty::<$numeric>().checked_product(), Ok(1 as $numeric));
                }

                #[rstest]
                fn [<checked_product_ $numeric _skips_none>]() {
                    let values: [Option<$numeric>; 4] =
                        [Some(2 as $numeric), None, Some(3 as $numeric), None];
                    assert_eq!(values.into_iter().checked_product(), Ok(Some(6 as $numeric)));
                }
            }
        )*
    };
}

product_tests_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! overflow_tests_for {
    ($($integer:ident),* $(,)?) => {
        $(
            paste::paste! {
                #[rstest]
                fn [<checked_product_ $integer _reports_overflow>]() {
                    let maximum: $integer = <$integer>::MAX;
                    let result = [maximum, 2].into_iter().checked_product();
                    assert_eq!(result, Err(OverflowError { operation: "checked_product" }));
                }
            }
        )*
    };
}

overflow_tests_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Edge Cases
// =============================================================================

#[rstest]
fn checked_product_with_zero_is_zero() {
    assert_eq!([5, 0, i64::MAX].into_iter().checked_product(), Ok(0));
}

#[rstest]
fn checked_product_of_negative_values() {
    assert_eq!([-2, -3, -4].into_iter().checked_product(), Ok(-24));
}

#[rstest]
fn checked_product_of_only_none_is_one() {
    let values: [Option<i32>; 2] = [None, None];

    assert_eq!(values.into_iter().checked_product(), Ok(Some(1)));
}

#[rstest]
fn checked_product_float_overflow_saturates() {
    let result = [f64::MAX, 10.0].into_iter().checked_product();

    assert_eq!(result, Ok(f64::INFINITY));
}

#[rstest]
fn checked_product_overflow_error_message() {
    let error = [u8::MAX, u8::MAX].into_iter().checked_product().unwrap_err();

    assert_eq!(
        error.to_string(),
        "checked_product: arithmetic operation resulted in an overflow"
    );
}

// =============================================================================
// checked_product_by
// =============================================================================

#[rstest]
fn checked_product_by_multiplies_projected_values() {
    let rectangles = [(2, 3), (4, 5)];

    let result = rectangles
        .into_iter()
        .checked_product_by(|(width, height)| width * height);

    assert_eq!(result, Ok(120));
}

#[rstest]
fn checked_product_by_of_empty_is_one() {
    let result = std::iter::empty::<&str>().checked_product_by(|text| text.len() as u32);

    assert_eq!(result, Ok(1));
}

#[rstest]
fn checked_product_by_reports_its_own_operation() {
    let result = [200_u8, 2].into_iter().checked_product_by(|value| value);

    assert_eq!(
        result,
        Err(OverflowError {
            operation: "checked_product_by"
        })
    );
}

#[rstest]
fn checked_product_by_with_optional_projection_skips_none() {
    let result = ["2", "x", "5"]
        .into_iter()
        .checked_product_by(|text| text.parse::<i32>().ok());

    assert_eq!(result, Ok(Some(10)));
}

// =============================================================================
// Decimal Products
// =============================================================================

#[cfg(feature = "decimal")]
mod decimal {
    use super::*;
    use rust_decimal::Decimal;

    macro_rules! decimal_product_tests {
        ($($name:ident: $values:expr => $expected:expr),* $(,)?) => {
            $(
                paste::paste! {
                    #[rstest]
                    fn [<checked_product_decimal_ $name>]() {
                        let values: Vec<Decimal> = $values;
                        assert_eq!(values.into_iter().checked_product(), $expected);
                    }

                    #[rstest]
                    fn [<checked_product_optional_decimal_ $name>]() {
                        let values: Vec<Option<Decimal>> = $values
                            .into_iter()
                            .flat_map(|value| [Some(value), None])
                            .collect();
                        let expected: Result<Decimal, OverflowError> = $expected;
                        assert_eq!(values.into_iter().checked_product(), expected.map(Some));
                    }
                }
            )*
        };
    }

    decimal_product_tests!(
        multiplies_fractions: vec![Decimal::new(15, 1), Decimal::TWO, Decimal::new(25, 2)]
            => Ok(Decimal::new(75, 2)),
        of_empty_is_one: Vec::new() => Ok(Decimal::ONE),
        with_zero_is_zero: vec![Decimal::MAX, Decimal::ZERO] => Ok(Decimal::ZERO),
        reports_overflow: vec![Decimal::MAX, Decimal::TWO]
            => Err(OverflowError { operation: "checked_product" }),
    );

    #[rstest]
    fn checked_product_by_projects_decimals() {
        let prices = [("apple", 150_i64), ("pear", 200)];

        let result = prices
            .into_iter()
            .checked_product_by(|(_, cents)| Decimal::new(cents, 2));

        assert_eq!(result, Ok(Decimal::new(3, 0)));
    }

    #[rstest]
    fn checked_product_by_reports_decimal_overflow() {
        let result = [Decimal::MAX, Decimal::MAX].into_iter().checked_product_by(|value| value);

        assert_eq!(
            result,
            Err(OverflowError {
                operation: "checked_product_by"
            })
        );
    }
}
