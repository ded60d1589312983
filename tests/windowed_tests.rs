#![cfg(feature = "transform")]
//! Unit tests for `Chains::windowed`.

use chains::error::ArgumentError;
use chains::sequence::Chains;
use rstest::rstest;

#[rstest]
fn windowed_rejects_zero_size() {
    let error = (0..10).windowed(0).unwrap_err();

    assert_eq!(
        error,
        ArgumentError::OutOfRange {
            name: "size",
            value: "0".to_string(),
            message: "Given argument was less than the specified minimum of 1.".to_string(),
        }
    );
}

#[rstest]
fn windowed_yields_nothing_when_not_enough_elements() {
    let mut windows = (1..2).windowed(2).unwrap();

    assert!(windows.next().is_none());
}

#[rstest]
fn windowed_yields_nothing_for_empty_source() {
    assert_eq!(std::iter::empty::<u8>().windowed(1).unwrap().count(), 0);
}

#[rstest]
fn windowed_produces_fixed_size_windows_until_end() {
    let windows: Vec<Vec<i32>> = [1, 2, 3, 4, 5].into_iter().windowed(3).unwrap().collect();

    assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    assert!(windows.iter().all(|window| window.len() == 3));
}

#[rstest]
#[case(1, 10)]
#[case(3, 8)]
#[case(10, 1)]
#[case(11, 0)]
fn windowed_count_is_length_minus_size_plus_one(#[case] size: usize, #[case] expected: usize) {
    assert_eq!((0..10).windowed(size).unwrap().count(), expected);
}

#[rstest]
fn windowed_size_one_wraps_each_element() {
    let windows: Vec<Vec<&str>> = ["a", "b"].into_iter().windowed(1).unwrap().collect();

    assert_eq!(windows, vec![vec!["a"], vec!["b"]]);
}

#[rstest]
fn windowed_windows_are_independent_copies() {
    let windows: Vec<Vec<String>> = ["x", "y", "z"]
        .into_iter()
        .map(String::from)
        .windowed(2)
        .unwrap()
        .collect();

    assert_eq!(windows[0], vec!["x".to_string(), "y".to_string()]);
    assert_eq!(windows[1], vec!["y".to_string(), "z".to_string()]);
}

#[rstest]
fn windowed_reports_configured_size() {
    assert_eq!((0..3).windowed(2).unwrap().size(), 2);
}
