//! Running accumulation over a sequence.
//!
//! Two adapters cover the three ways of scanning:
//!
//! - [`ScanReduce`]: no seed; the first element is the initial state and is
//!   emitted as-is
//! - [`Scan`]: an explicit seed, emitted first, with every emitted state
//!   passed through a projection (the identity projection is `Clone::clone`)
//!
//! Both apply the accumulator exactly once per element pulled from the
//! source, never ahead of demand.

use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// A seeded scan that projects every state it emits.
///
/// Created by [`Chains::scan_seeded`](super::Chains::scan_seeded) and
/// [`Chains::scan_projected`](super::Chains::scan_projected).
///
/// The seed is emitted before any element is read, so the output always has
/// one more element than the source.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Scan<I, S, F, P> {
    source: Fuse<I>,
    state: Option<S>,
    seed_pending: bool,
    accumulator: F,
    transformer: P,
}

impl<I: Iterator, S, F, P> Scan<I, S, F, P> {
    pub(super) fn new<R>(source: I, seed: S, accumulator: F, transformer: P) -> Self
    where
        F: FnMut(S, I::Item) -> S,
        P: FnMut(&S) -> R,
    {
        Self {
            source: source.fuse(),
            state: Some(seed),
            seed_pending: true,
            accumulator,
            transformer,
        }
    }
}

impl<I, S, F, P> fmt::Debug for Scan<I, S, F, P>
where
    I: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Scan")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("seed_pending", &self.seed_pending)
            .finish_non_exhaustive()
    }
}

impl<I, S, R, F, P> Iterator for Scan<I, S, F, P>
where
    I: Iterator,
    F: FnMut(S, I::Item) -> S,
    P: FnMut(&S) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seed_pending {
            self.seed_pending = false;
        } else {
            let item = self.source.next()?;
            let state = self.state.take()?;
            self.state = Some((self.accumulator)(state, item));
        }
        self.state.as_ref().map(&mut self.transformer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.seed_pending {
            (
                lower.saturating_add(1),
                upper.and_then(|upper| upper.checked_add(1)),
            )
        } else {
            (lower, upper)
        }
    }
}

impl<I, S, R, F, P> FusedIterator for Scan<I, S, F, P>
where
    I: Iterator,
    F: FnMut(S, I::Item) -> S,
    P: FnMut(&S) -> R,
{
}

/// An unseeded scan whose state has the element type.
///
/// Created by [`Chains::scan_reduce`](super::Chains::scan_reduce).
///
/// The first element is emitted unchanged and becomes the state; each later
/// element is folded into it. An empty source yields nothing.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ScanReduce<I: Iterator, F> {
    source: Fuse<I>,
    state: Option<I::Item>,
    accumulator: F,
}

impl<I: Iterator, F> ScanReduce<I, F> {
    pub(super) fn new(source: I, accumulator: F) -> Self
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        Self {
            source: source.fuse(),
            state: None,
            accumulator,
        }
    }
}

impl<I, F> fmt::Debug for ScanReduce<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ScanReduce")
            .field("source", &self.source)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<I, F> Iterator for ScanReduce<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        let state = match self.state.take() {
            Some(state) => (self.accumulator)(state, item),
            None => item,
        };
        self.state = Some(state.clone());
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> FusedIterator for ScanReduce<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}
