//! First-occurrence filtering by projected key.

use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{Fuse, FusedIterator};

use crate::hasher::DefaultBuildHasher;

/// An iterator that keeps the first element for each distinct key.
///
/// Created by [`Chains::distinct_by`](super::Chains::distinct_by) and
/// [`Chains::distinct_by_with_hasher`](super::Chains::distinct_by_with_hasher).
///
/// Keys are computed once per element and remembered in a set, so memory
/// grows with the number of distinct keys, not with the source length.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctBy<I, K, F, S = DefaultBuildHasher> {
    source: Fuse<I>,
    seen: HashSet<K, S>,
    selector: F,
}

impl<I: Iterator, K, F, S> DistinctBy<I, K, F, S> {
    pub(super) fn new(source: I, selector: F, hasher: S) -> Self
    where
        F: FnMut(&I::Item) -> K,
    {
        Self {
            source: source.fuse(),
            seen: HashSet::with_hasher(hasher),
            selector,
        }
    }
}

impl<I, K, F, S> DistinctBy<I, K, F, S> {
    /// Returns the number of distinct keys seen so far.
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I, K, F, S> fmt::Debug for DistinctBy<I, K, F, S>
where
    I: fmt::Debug,
    K: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DistinctBy")
            .field("source", &self.source)
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}

impl<I, K, F, S> Iterator for DistinctBy<I, K, F, S>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
    S: BuildHasher,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        let selector = &mut self.selector;
        self.source.find(|item| seen.insert(selector(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        // Once a key is recorded every remaining element may be a duplicate.
        let lower = if self.seen.is_empty() { lower.min(1) } else { 0 };
        (lower, upper)
    }
}

impl<I, K, F, S> FusedIterator for DistinctBy<I, K, F, S>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
    S: BuildHasher,
{
}
