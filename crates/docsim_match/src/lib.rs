//! # Docsim Match (`docsim_match`)
//!
//! ## Purpose
//!
//! `docsim_match` sits on top of the corpus layer (`docsim_corpus`) and turns
//! fingerprints into similarity verdicts: a symmetric overlap percentage per
//! pair of documents, a ranked one-vs-all view for a target document, and the
//! full pair matrix for a corpus.
//!
//! ## The metric
//!
//! [`score`] implements a Dice-style overlap over *distinct* window hashes:
//!
//! ```text
//! score = 2 * SH / (THA + THB) * 100
//! ```
//!
//! where `SH` counts hash values occurring in both fingerprints (each value
//! once, however often it repeats) and `THA`/`THB` are the total fingerprint
//! lengths including duplicates. The result is symmetric and bounded in
//! `[0, 100]`; either side empty gives `0.0`. The distinct-set intersection
//! is part of the contract — switching to multiset intersection would change
//! every reported percentage.
//!
//! ## Core Types
//!
//! - [`MatchHit`]: ranked entry from [`rank_against`].
//! - [`PairScore`]: one unordered pair from [`score_all_pairs`].
//! - [`SimilarityLevel`]: the 10/40/70 banding of a percentage.
//! - [`MatchMetrics`] / [`set_match_metrics`]: globally installable observer
//!   for ranking latency and hit counts.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{rank_against, score, score_all_pairs, score_hashes};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchError, MatchHit, PairScore, SimilarityLevel};
