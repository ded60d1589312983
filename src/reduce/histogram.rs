//! Occurrence counts per distinct element.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::hasher::DefaultBuildHasher;

/// How many times each distinct element occurred in a sequence.
///
/// Built with [`Reduce::to_histogram`](super::Reduce::to_histogram) or by
/// collecting an iterator.
///
/// # Examples
///
/// ```rust
/// use chains::reduce::Histogram;
///
/// let histogram: Histogram<i32> = [1, 2, 3, 1, 2, 1].into_iter().collect();
/// assert_eq!(histogram.count(&1), 3);
/// assert_eq!(histogram.count(&2), 2);
/// assert_eq!(histogram.count(&4), 0);
/// assert_eq!(histogram.len(), 3);
/// ```
#[derive(Clone)]
pub struct Histogram<K, S = DefaultBuildHasher> {
    counts: HashMap<K, usize, S>,
}

impl<K> Histogram<K> {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultBuildHasher::default())
    }
}

impl<K> Default for Histogram<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> Histogram<K, S> {
    /// Creates an empty histogram that hashes keys with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of distinct elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no element has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the sum of all counts, saturating at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().fold(0, |sum, count| sum.saturating_add(*count))
    }

    /// Iterates over `(element, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Unwraps the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<K, usize, S> {
        self.counts
    }
}

impl<K, S> Histogram<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Records one more occurrence of `key`.
    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Returns how many times `key` occurred, or `None` if it never did.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    /// Returns how many times `key` occurred, `0` if it never did.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(0)
    }

    /// Returns `true` if `key` occurred at least once.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }
}

impl<K, S> FromIterator<K> for Histogram<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = K>>(iterable: T) -> Self {
        let mut histogram = Self::with_hasher(S::default());
        histogram.extend(iterable);
        histogram
    }
}

impl<K, S> Extend<K> for Histogram<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iterable: T) {
        for key in iterable {
            self.record(key);
        }
    }
}

impl<K, S> IntoIterator for Histogram<K, S> {
    type Item = (K, usize);
    type IntoIter = hash_map::IntoIter<K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<K, S> PartialEq for Histogram<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K, S> Eq for Histogram<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, S> fmt::Debug for Histogram<K, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<K: fmt::Display, S> fmt::Display for Histogram<K, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, count) in &self.counts {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {count}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, S> serde::Serialize for Histogram<K, S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, count) in &self.counts {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct HistogramVisitor<K, S> {
    marker: std::marker::PhantomData<(K, S)>,
}

#[cfg(feature = "serde")]
impl<'de, K, S> serde::de::Visitor<'de> for HistogramVisitor<K, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Histogram<K, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of elements to occurrence counts")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut histogram = Histogram::with_hasher(S::default());
        while let Some((key, count)) = access.next_entry::<K, usize>()? {
            if count == 0 {
                return Err(serde::de::Error::custom("occurrence counts must be positive"));
            }
            let slot = histogram.counts.entry(key).or_insert(0);
            *slot = slot.checked_add(count).ok_or_else(|| {
                <A::Error as serde::de::Error>::custom("occurrence count overflowed")
            })?;
        }
        Ok(histogram)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, S> serde::Deserialize<'de> for Histogram<K, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(HistogramVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
