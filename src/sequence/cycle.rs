//! Endless replay of a sequence.

use std::iter::{Fuse, FusedIterator};

use crate::trace::trace_event;

/// An iterator that repeats the elements of its source forever.
///
/// Created by [`Chains::cycle_buffered`](super::Chains::cycle_buffered).
///
/// Unlike [`Iterator::cycle`], the source does not have to be `Clone`: the
/// first lap is recorded as it passes through, and every later lap is
/// replayed from that recording. The source is therefore read exactly once.
/// An empty source produces an empty iterator.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cycle<I: Iterator> {
    source: Fuse<I>,
    lap: Vec<I::Item>,
    // `None` until the first lap has been fully recorded.
    replay_position: Option<usize>,
}

impl<I: Iterator> Cycle<I> {
    pub(super) fn new(source: I) -> Self {
        Self {
            source: source.fuse(),
            lap: Vec::new(),
            replay_position: None,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let position = match self.replay_position {
            Some(position) => position,
            None => {
                if let Some(item) = self.source.next() {
                    self.lap.push(item.clone());
                    return Some(item);
                }
                if self.lap.is_empty() {
                    return None;
                }
                trace_event!(trace, lap_length = self.lap.len(), "cycle lap recorded");
                0
            }
        };

        let item = self.lap.get(position)?.clone();
        self.replay_position = Some((position + 1) % self.lap.len());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.lap.is_empty() {
            return (usize::MAX, None);
        }
        match self.source.size_hint() {
            (0, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
