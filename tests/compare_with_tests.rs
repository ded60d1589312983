#![cfg(feature = "transform")]
//! Unit tests for `Chains::compare_with` and `Chains::compare_with_by_key`.

use chains::sequence::Chains;
use rstest::rstest;
use std::cmp::Ordering;

// =============================================================================
// Natural Order
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3, 0], vec![1, 2, 3, 4], Ordering::Less)]
#[case(vec![1, 2, 3], vec![1, 2, 3, 4], Ordering::Less)]
#[case(vec![1, 2, 3, 4], vec![1, 2, 3, 0], Ordering::Greater)]
#[case(vec![1, 2, 3, 4], vec![1, 2, 3], Ordering::Greater)]
#[case(vec![1, 2, 3, 4], vec![1, 2, 3, 4], Ordering::Equal)]
#[case(vec![], vec![], Ordering::Equal)]
fn compare_with_natural_order(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] expected: Ordering,
) {
    assert_eq!(first.into_iter().compare_with(second), expected);
}

#[rstest]
fn compare_with_sign_matches_integer_convention() {
    assert!(([1, 2, 3].into_iter().compare_with([1, 2, 3, 4]) as i32) < 0);
    assert!(([2].into_iter().compare_with([1, 9]) as i32) > 0);
    assert_eq!([7].into_iter().compare_with([7]) as i32, 0);
}

#[rstest]
fn compare_with_stops_at_first_difference_on_infinite_sources() {
    assert_eq!((0..).compare_with((0..).map(|item| item * 2)), Ordering::Less);
}

// =============================================================================
// By Key
// =============================================================================

fn parse(text: &&str) -> i32 {
    text.parse().unwrap_or_default()
}

#[rstest]
#[case(vec!["1", "2", "3", "0"], vec!["1", "2", "3", "4"], Ordering::Less)]
#[case(vec!["1", "2", "3"], vec!["1", "2", "3", "4"], Ordering::Less)]
#[case(vec!["1", "2", "3", "4"], vec!["1", "2", "3", "0"], Ordering::Greater)]
#[case(vec!["1", "2", "3", "4"], vec!["1", "2", "3"], Ordering::Greater)]
#[case(vec!["1", "2", "3", "4"], vec!["1", "2", "3", "4"], Ordering::Equal)]
fn compare_with_by_key(
    #[case] first: Vec<&str>,
    #[case] second: Vec<&str>,
    #[case] expected: Ordering,
) {
    assert_eq!(first.into_iter().compare_with_by_key(second, parse), expected);
}

#[rstest]
fn compare_with_by_key_differs_from_natural_order() {
    let first = ["10"];
    let second = ["9"];

    assert_eq!(first.into_iter().compare_with(second), Ordering::Less);
    assert_eq!(first.into_iter().compare_with_by_key(second, parse), Ordering::Greater);
}

#[rstest]
fn compare_with_by_key_equal_keys_compare_equal() {
    let ordering = ["a", "bb"]
        .into_iter()
        .compare_with_by_key(["x", "yy"], |text| text.len());

    assert_eq!(ordering, Ordering::Equal);
}
