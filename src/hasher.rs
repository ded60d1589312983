//! The default hasher used by key-tracking operations.
//!
//! `DistinctBy` and `Histogram` hash keys with [`DefaultBuildHasher`]. By
//! default this is the std SipHash [`RandomState`](std::collections::hash_map::RandomState);
//! the `fxhash` and `ahash` features swap in faster non-cryptographic hashers.
//! When both are enabled `fxhash` wins.

#[cfg(feature = "fxhash")]
/// The `BuildHasher` used when no other is supplied.
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The `BuildHasher` used when no other is supplied.
pub type DefaultBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The `BuildHasher` used when no other is supplied.
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;
