//! Lazy sequence transformers.
//!
//! Every transformer wraps a source iterator and yields a new lazy iterator.
//! Creating one never reads the source (except where noted below); elements
//! are computed one at a time as the caller demands them, with only the
//! state each algorithm needs:
//!
//! | operation | extra state |
//! |---|---|
//! | [`Chains::chunk_by`] | nothing between chunks; one chunk in flight |
//! | [`Chains::windowed`] | one window of `size` elements |
//! | [`Chains::cycle_buffered`] | one recorded lap |
//! | [`Chains::scan_reduce`], [`Chains::scan_seeded`], [`Chains::scan_projected`] | one accumulator |
//! | [`Chains::distinct_by`] | the set of keys seen so far |
//! | [`Chains::except_last`] | one held-back element |
//!
//! [`Chains::except_first`] and [`Chains::except_last`] read the first
//! element up front because they must fail on an empty source.
//! [`Chains::compare_with`] consumes both sequences up to the first
//! difference and returns an [`Ordering`].
//!
//! # Examples
//!
//! ```rust
//! use chains::sequence::Chains;
//!
//! let chunks: Vec<Vec<i32>> = (0..5).chunk_by(2).unwrap().collect();
//! assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);
//!
//! let windows: Vec<Vec<i32>> = [1, 2, 3, 4, 5].into_iter().windowed(3).unwrap().collect();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//!
//! let cycled: Vec<i32> = [1, 2, 3].into_iter().cycle_buffered().take(5).collect();
//! assert_eq!(cycled, vec![1, 2, 3, 1, 2]);
//!
//! let sums: Vec<i32> = [1, 2, 3].into_iter().scan_seeded(0, |sum, item| sum + item).collect();
//! assert_eq!(sums, vec![0, 1, 3, 6]);
//!
//! let distinct: Vec<i32> = [1, 2, 3, 4].into_iter().distinct_by(|item| item % 2).collect();
//! assert_eq!(distinct, vec![1, 2]);
//!
//! assert!([1, 2, 3].into_iter().compare_with([1, 2, 3, 4]).is_lt());
//! ```

mod chunk_by;
mod compare_with;
mod cycle;
mod distinct_by;
mod except;
mod scan;
mod windowed;

pub use chunk_by::ChunkBy;
pub use cycle::Cycle;
pub use distinct_by::DistinctBy;
pub use except::{ExceptFirst, ExceptLast};
pub use scan::{Scan, ScanReduce};
pub use windowed::Windowed;

use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use crate::error::{ArgumentError, EmptySequenceError};
use crate::hasher::DefaultBuildHasher;

/// Sequence transformers available on every iterator.
///
/// Method names avoid `cycle` and `scan` so they never clash with the
/// methods of [`Iterator`] itself.
pub trait Chains: Iterator + Sized {
    /// Splits the sequence into consecutive chunks of at most `size`
    /// elements.
    ///
    /// Every chunk holds exactly `size` elements except possibly the last,
    /// which holds the remainder. An empty sequence yields a single empty
    /// chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Invalid`] if `size` is zero. No element is
    /// read in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// let chunks: Vec<Vec<i32>> = (0..10).chunk_by(3).unwrap().collect();
    /// assert_eq!(chunks.len(), 4);
    /// assert_eq!(chunks[3], vec![9]);
    ///
    /// let empty: Vec<Vec<i32>> = std::iter::empty().chunk_by(3).unwrap().collect();
    /// assert_eq!(empty, vec![Vec::<i32>::new()]);
    /// ```
    fn chunk_by(self, size: usize) -> Result<ChunkBy<Self>, ArgumentError> {
        ChunkBy::new(self, size)
    }

    /// Yields every run of `size` consecutive elements, sliding by one.
    ///
    /// A sequence of `n >= size` elements yields `n - size + 1` windows; a
    /// shorter sequence yields none.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::OutOfRange`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// let pairs: Vec<Vec<char>> = "abc".chars().windowed(2).unwrap().collect();
    /// assert_eq!(pairs, vec![vec!['a', 'b'], vec!['b', 'c']]);
    ///
    /// assert_eq!((0..2).windowed(3).unwrap().count(), 0);
    /// ```
    fn windowed(self, size: usize) -> Result<Windowed<Self>, ArgumentError>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, size)
    }

    /// Repeats the sequence forever, reading the source only once.
    ///
    /// An empty sequence stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// // A one-pass source: `Iterator::cycle` would need it to be `Clone`.
    /// let lines = "a\nb".lines().map(String::from);
    /// let cycled: Vec<String> = lines.cycle_buffered().take(3).collect();
    /// assert_eq!(cycled, ["a", "b", "a"]);
    /// ```
    fn cycle_buffered(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    /// Running fold without a seed: emits the first element, then each
    /// successive `accumulator(state, element)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// let maxima: Vec<i32> = [3, 1, 4, 1, 5].into_iter().scan_reduce(i32::max).collect();
    /// assert_eq!(maxima, vec![3, 3, 4, 4, 5]);
    /// ```
    fn scan_reduce<F>(self, accumulator: F) -> ScanReduce<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        ScanReduce::new(self, accumulator)
    }

    /// Running fold from `seed`: emits `seed`, then each successive state.
    ///
    /// The output is always one element longer than the source.
    fn scan_seeded<S, F>(self, seed: S, accumulator: F) -> Scan<Self, S, F, fn(&S) -> S>
    where
        S: Clone,
        F: FnMut(S, Self::Item) -> S,
    {
        Scan::new(self, seed, accumulator, S::clone as fn(&S) -> S)
    }

    /// Running fold from `seed`, emitting `transformer(state)` for every
    /// state including the seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// let labels: Vec<String> = [1, 2, 3]
    ///     .into_iter()
    ///     .scan_projected(0, |sum, item| sum + item, |sum| format!("total={sum}"))
    ///     .collect();
    /// assert_eq!(labels, ["total=0", "total=1", "total=3", "total=6"]);
    /// ```
    fn scan_projected<S, R, F, P>(self, seed: S, accumulator: F, transformer: P) -> Scan<Self, S, F, P>
    where
        F: FnMut(S, Self::Item) -> S,
        P: FnMut(&S) -> R,
    {
        Scan::new(self, seed, accumulator, transformer)
    }

    /// Keeps the first element for each distinct key, in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let by_initial: Vec<&str> = words.into_iter().distinct_by(|word| word.chars().next()).collect();
    /// assert_eq!(by_initial, ["apple", "banana", "cherry"]);
    /// ```
    fn distinct_by<K, F>(self, selector: F) -> DistinctBy<Self, K, F>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, selector, DefaultBuildHasher::default())
    }

    /// [`distinct_by`](Chains::distinct_by) with a caller-supplied hasher.
    fn distinct_by_with_hasher<K, F, S>(self, selector: F, hasher: S) -> DistinctBy<Self, K, F, S>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
        S: BuildHasher,
    {
        DistinctBy::new(self, selector, hasher)
    }

    /// Compares two sequences lexicographically by their elements.
    ///
    /// A strict prefix is less than the longer sequence. Use
    /// `ordering as i32` for a `-1 / 0 / 1` sign.
    fn compare_with<J>(self, other: J) -> Ordering
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        compare_with::compare_by(self, other, Ord::cmp)
    }

    /// Compares two sequences lexicographically by a projected key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chains::sequence::Chains;
    /// use std::cmp::Ordering;
    ///
    /// let first = ["1", "2", "10"];
    /// let second = ["1", "2", "9"];
    /// let ordering = first
    ///     .into_iter()
    ///     .compare_with_by_key(second, |text| text.parse::<i32>().unwrap_or_default());
    /// assert_eq!(ordering, Ordering::Greater);
    /// ```
    fn compare_with_by_key<J, K, F>(self, other: J, mut selector: F) -> Ordering
    where
        J: IntoIterator<Item = Self::Item>,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        compare_with::compare_by(self, other, |left, right| selector(left).cmp(&selector(right)))
    }

    /// Every element except the first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    ///
    /// Unlike the other transformers this is not fully lazy: the first
    /// element is read when this is called, so emptiness is reported here
    /// rather than on the first `next`.
    fn except_first(self) -> Result<ExceptFirst<Self>, EmptySequenceError> {
        ExceptFirst::new(self)
    }

    /// Every element except the last.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence is empty.
    ///
    /// Unlike the other transformers this is not fully lazy: the first
    /// element is read when this is called, so emptiness is reported here
    /// rather than on the first `next`.
    fn except_last(self) -> Result<ExceptLast<Self>, EmptySequenceError> {
        ExceptLast::new(self)
    }
}

impl<I: Iterator> Chains for I {}

static_assertions::assert_impl_all!(ChunkBy<std::vec::IntoIter<String>>: Send, Sync, Clone, std::iter::FusedIterator);
static_assertions::assert_impl_all!(Windowed<std::vec::IntoIter<String>>: Send, Sync, Clone, std::iter::FusedIterator);
static_assertions::assert_impl_all!(Cycle<std::vec::IntoIter<String>>: Send, Sync, Clone, std::iter::FusedIterator);
static_assertions::assert_not_impl_any!(Cycle<std::vec::IntoIter<std::rc::Rc<i32>>>: Send, Sync);
