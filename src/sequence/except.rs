//! Sequences without their first or last element.
//!
//! Both operations need at least one element, so the first element is read
//! when the adapter is created. An empty source is reported as an
//! [`EmptySequenceError`] rather than silently producing nothing.

use std::iter::{Fuse, FusedIterator};

use crate::error::EmptySequenceError;
use crate::trace::trace_event;

fn empty(operation: &'static str) -> EmptySequenceError {
    trace_event!(debug, operation, "empty sequence rejected");
    EmptySequenceError { operation }
}

/// Every element except the first.
///
/// Created by [`Chains::except_first`](super::Chains::except_first).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ExceptFirst<I> {
    source: Fuse<I>,
}

impl<I: Iterator> ExceptFirst<I> {
    pub(super) fn new(source: I) -> Result<Self, EmptySequenceError> {
        let mut source = source.fuse();
        source.next().ok_or_else(|| empty("except_first"))?;
        Ok(Self { source })
    }
}

impl<I: Iterator> Iterator for ExceptFirst<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: Iterator> FusedIterator for ExceptFirst<I> {}

/// Every element except the last.
///
/// Created by [`Chains::except_last`](super::Chains::except_last).
///
/// One element is always held back; it is released when the next element
/// arrives and dropped when the source ends.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ExceptLast<I: Iterator> {
    source: Fuse<I>,
    pending: Option<I::Item>,
}

impl<I: Iterator> ExceptLast<I> {
    pub(super) fn new(source: I) -> Result<Self, EmptySequenceError> {
        let mut source = source.fuse();
        let first = source.next().ok_or_else(|| empty("except_last"))?;
        Ok(Self {
            source,
            pending: Some(first),
        })
    }
}

impl<I: Iterator> Iterator for ExceptLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        self.pending.replace(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: Iterator> FusedIterator for ExceptLast<I> {}
