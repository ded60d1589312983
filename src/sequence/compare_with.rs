//! Lexicographic comparison of two sequences.

use std::cmp::Ordering;

/// Compares two sequences element by element with `compare`.
///
/// Both cursors advance in lockstep. The first unequal pair decides the
/// result; otherwise the sequence that runs out first is the lesser one.
/// Neither sequence is read past that point.
pub(super) fn compare_by<I, J, C>(mut left: I, right: J, mut compare: C) -> Ordering
where
    I: Iterator,
    J: IntoIterator<Item = I::Item>,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left_item), Some(right_item)) => match compare(&left_item, &right_item) {
                Ordering::Equal => {}
                decided => return decided,
            },
        }
    }
}
