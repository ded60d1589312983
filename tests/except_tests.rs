#![cfg(feature = "transform")]
//! Unit tests for `Chains::except_first` and `Chains::except_last`.

use chains::error::EmptySequenceError;
use chains::sequence::Chains;
use rstest::rstest;
use std::iter::once;

// =============================================================================
// except_first
// =============================================================================

#[rstest]
fn except_first_fails_if_source_is_empty() {
    let result = std::iter::empty::<i32>().except_first();

    assert_eq!(
        result.unwrap_err(),
        EmptySequenceError {
            operation: "except_first"
        }
    );
}

#[rstest]
fn except_first_yields_all_elements_except_the_first() {
    let actual: Vec<i32> = (1..=3).except_first().unwrap().collect();

    assert_eq!(actual, vec![2, 3]);
}

#[rstest]
fn except_first_is_the_inverse_of_first() {
    let source = vec![1, 2, 3];
    let first = source[0];

    let rebuilt: Vec<i32> = once(first)
        .chain(source.clone().into_iter().except_first().unwrap())
        .collect();

    assert_eq!(rebuilt, source);
}

// =============================================================================
// except_last
// =============================================================================

#[rstest]
fn except_last_fails_if_source_is_empty() {
    let result = std::iter::empty::<i32>().except_last();

    assert_eq!(
        result.unwrap_err(),
        EmptySequenceError {
            operation: "except_last"
        }
    );
}

#[rstest]
fn except_last_yields_all_elements_except_the_last() {
    let actual: Vec<i32> = (1..=3).except_last().unwrap().collect();

    assert_eq!(actual, vec![1, 2]);
}

#[rstest]
fn except_last_is_the_inverse_of_last() {
    let source = vec![1, 2, 3];
    let last = source[source.len() - 1];

    let rebuilt: Vec<i32> = source
        .clone()
        .into_iter()
        .except_last()
        .unwrap()
        .chain(once(last))
        .collect();

    assert_eq!(rebuilt, source);
}

#[rstest]
fn except_last_works_on_an_infinite_source() {
    let actual: Vec<i32> = (0..).except_last().unwrap().take(3).collect();

    assert_eq!(actual, vec![0, 1, 2]);
}
