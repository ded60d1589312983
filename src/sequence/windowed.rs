//! Overlapping fixed-size windows.

use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator};

use crate::error::ArgumentError;
use crate::require::Ensure;

/// An iterator over overlapping windows of exactly `size` consecutive
/// elements, sliding by one element per step.
///
/// Created by [`Chains::windowed`](super::Chains::windowed).
///
/// The first window reads `size` elements; every later window reads one.
/// Each yielded window is an independent copy of the current slice, so
/// holding on to it is unaffected by further iteration. A source shorter
/// than `size` yields nothing.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Windowed<I: Iterator> {
    source: Fuse<I>,
    size: usize,
    window: VecDeque<I::Item>,
    primed: bool,
}

impl<I: Iterator> Windowed<I> {
    pub(super) fn new(source: I, size: usize) -> Result<Self, ArgumentError> {
        let size = size.ensure_between_inclusive(1, usize::MAX, "size")?;
        Ok(Self {
            source: source.fuse(),
            size,
            window: VecDeque::new(),
            primed: false,
        })
    }

    /// Returns the number of elements in every window.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.primed {
            let item = self.source.next()?;
            self.window.pop_front();
            self.window.push_back(item);
        } else {
            self.primed = true;
            self.window.extend(self.source.by_ref().take(self.size));
            if self.window.len() < self.size {
                self.window.clear();
                return None;
            }
        }
        Some(self.window.iter().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.primed {
            (lower, upper)
        } else {
            let windows = |length: usize| length.saturating_sub(self.size - 1);
            (windows(lower), upper.map(windows))
        }
    }
}

impl<I> FusedIterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
