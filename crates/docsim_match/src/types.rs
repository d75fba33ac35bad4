use serde::{Deserialize, Serialize};
use thiserror::Error;

use docsim_corpus::CorpusError;

/// Banding of a similarity percentage into reporting categories.
///
/// Thresholds follow the reference tool: below 10 is noise-level overlap,
/// 70 and above warrants review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityLevel {
    Minimal,
    Low,
    Medium,
    High,
}

impl SimilarityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else if score >= 10.0 {
            Self::Low
        } else {
            Self::Minimal
        }
    }
}

/// A single entry from one-vs-all ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchHit {
    /// The compared document (never the ranking target itself).
    pub doc_id: String,
    /// Overlap percentage in `[0, 100]`.
    pub score: f64,
    pub level: SimilarityLevel,
}

/// The score of one unordered document pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairScore {
    pub doc_a: String,
    pub doc_b: String,
    pub score: f64,
    pub level: SimilarityLevel,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Corpus lookup failed (unknown target id).
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
}
