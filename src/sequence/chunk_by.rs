//! Non-overlapping chunks of a sequence.

use std::iter::{Fuse, FusedIterator};

use crate::error::ArgumentError;
use crate::require::Ensure;

/// An iterator over consecutive, non-overlapping chunks of at most `size`
/// elements.
///
/// Created by [`Chains::chunk_by`](super::Chains::chunk_by).
///
/// Each chunk is read from the source when the outer iterator advances, so
/// a chunk stays valid however the caller treats it: dropping it unread
/// does not shift the chunks that follow.
///
/// An empty source yields exactly one empty chunk.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunkBy<I> {
    source: Fuse<I>,
    size: usize,
    started: bool,
}

impl<I: Iterator> ChunkBy<I> {
    pub(super) fn new(source: I, size: usize) -> Result<Self, ArgumentError> {
        let size = size.ensure(|size| *size > 0, "size", "Must be a positive integer.")?;
        Ok(Self {
            source: source.fuse(),
            size,
            started: false,
        })
    }
}

impl<I> ChunkBy<I> {
    /// Returns the maximum number of elements per chunk.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for ChunkBy<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.source.by_ref().take(self.size).collect();
        let first = !self.started;
        self.started = true;

        if chunk.is_empty() && !first {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        let chunks = |length: usize| {
            let count = length.div_ceil(self.size);
            if self.started { count } else { count.max(1) }
        };
        (chunks(lower), upper.map(chunks))
    }
}

impl<I: Iterator> FusedIterator for ChunkBy<I> {}
