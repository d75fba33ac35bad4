//! # Docsim Fingerprinting
//!
//! ## Purpose
//!
//! This crate turns a normalized symbol stream (see `docsim_canonical`) into a
//! document fingerprint: one polynomial hash per `k`-character window, in
//! window order. The window hash is maintained incrementally — O(1) per slide
//! — by [`RollingHash`]; [`fingerprint`] drives it over a whole stream.
//!
//! ## Core Types
//!
//! - [`FingerprintConfig`]: gram size, base and modulus. All three are
//!   run-wide configuration, not constants.
//! - [`RollingHash`]: the windowed hash state with its sliding invariant.
//! - [`Fingerprint`]: the ordered hash sequence plus the parameters that
//!   produced it.
//!
//! ## Collisions
//!
//! The default modulus (5807) is small relative to realistic fingerprint
//! counts, so equal hashes are an imperfect proxy for equal windows: distinct
//! grams can and do collide. That is a deliberate precision/performance
//! trade-off inherited from the reference behavior, not a bug — raise
//! [`FingerprintConfig::modulus`] (any value up to 61-bit primes is supported)
//! to trade arithmetic width for fewer false-positive overlaps.

mod config;
mod fingerprint;
mod rolling;

pub use config::FingerprintConfig;
pub use fingerprint::{fingerprint, Fingerprint, FingerprintMeta};
pub use rolling::RollingHash;

use thiserror::Error;

/// Errors produced by the fingerprint engine.
///
/// Degenerate streams (empty, or shorter than the gram size) are not errors:
/// [`fingerprint`] maps them to an empty [`Fingerprint`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// Configuration rejected before any hashing began.
    #[error("invalid fingerprint config: {0}")]
    InvalidConfig(String),
    /// A window of `gram_size` symbols cannot be formed over `len` symbols.
    #[error("cannot form a {gram_size}-symbol window over {len} symbols")]
    InvalidWindow { gram_size: usize, len: usize },
}
