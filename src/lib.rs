//! # chains
//!
//! Sequence transformers and reducers for Rust iterators that the standard
//! library does not provide.
//!
//! ## Overview
//!
//! - **Sequence transformers** ([`sequence::Chains`]): chunking, sliding
//!   windows, buffered cycling, running scans, distinct-by-key filtering,
//!   lexicographic comparison, and dropping the first or last element
//! - **Terminal consumers** ([`reduce::Reduce`]): overflow-checked products
//!   and histograms
//! - **Validation helpers** ([`require`]): fail-fast argument guards
//!
//! Every transformer is lazy and single-pass: building one reads nothing,
//! and each element is computed from the source only when it is demanded.
//! The one exception is `except_first` / `except_last`, which read the first
//! element when called so that an empty source fails at the call site.
//! Arguments are validated eagerly, so a rejected size is reported by the
//! call that received it, before any iteration starts.
//!
//! ## Feature Flags
//!
//! - `transform`: sequence transformers (default)
//! - `reduce`: terminal consumers (default)
//! - `serde`: serialization for [`reduce::Histogram`]
//! - `fxhash` / `ahash`: faster default hasher for key tracking
//! - `tracing`: diagnostic events for rejected arguments and cycle laps
//! - `decimal`: overflow-checked products of `rust_decimal::Decimal`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use chains::prelude::*;
//!
//! let readings = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let moving_sums: Vec<i32> = readings
//!     .into_iter()
//!     .windowed(3)?
//!     .map(|window| window.iter().sum())
//!     .collect();
//! assert_eq!(moving_sums, vec![8, 6, 10, 15, 16, 17]);
//!
//! let batches: Vec<Vec<i32>> = readings.into_iter().chunk_by(3)?.collect();
//! assert_eq!(batches.len(), 3);
//!
//! assert_eq!(readings.into_iter().to_histogram().count(&1), 2);
//! # Ok::<(), chains::error::ArgumentError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits and validation helpers.
///
/// # Usage
///
/// ```rust
/// use chains::prelude::*;
/// ```
pub mod prelude {
    pub use crate::require::{Ensure, EnsureNotNull};

    #[cfg(feature = "transform")]
    pub use crate::sequence::Chains;

    #[cfg(feature = "reduce")]
    pub use crate::reduce::{Multiplicative, Reduce};
}

pub mod error;
pub mod hasher;
pub mod require;
mod trace;

#[cfg(feature = "transform")]
pub mod sequence;

#[cfg(feature = "reduce")]
pub mod reduce;
