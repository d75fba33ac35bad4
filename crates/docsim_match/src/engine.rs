use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Instant;

use docsim_corpus::Corpus;
use docsim_fingerprint::Fingerprint;

use crate::metrics::metrics_recorder;
use crate::types::{MatchError, MatchHit, PairScore, SimilarityLevel};

/// Overlap percentage between two fingerprints.
///
/// `2 * SH / (THA + THB) * 100`, with `SH` the number of distinct hash values
/// present in both fingerprints and `THA`/`THB` the total lengths including
/// duplicates. Returns `0.0` when either fingerprint is empty.
pub fn score(a: &Fingerprint, b: &Fingerprint) -> f64 {
    score_hashes(&a.hashes, &b.hashes)
}

/// [`score`] over raw hash sequences, for callers that carry fingerprints as
/// plain integer lists.
pub fn score_hashes(a: &[u64], b: &[u64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<u64> = a.iter().copied().collect();
    let set_b: HashSet<u64> = b.iter().copied().collect();
    let shared = set_a.intersection(&set_b).count();

    let total = a.len() + b.len();
    (2.0 * shared as f64) / (total as f64) * 100.0
}

/// Score one corpus document against every other entry.
///
/// Hits are sorted by descending score, ties broken by document id so the
/// ordering is stable across runs. The target itself is excluded. Fails with
/// `NotFound` (via [`MatchError::Corpus`]) when `target_id` was never
/// ingested.
pub fn rank_against(corpus: &Corpus, target_id: &str) -> Result<Vec<MatchHit>, MatchError> {
    let start = Instant::now();
    let target = corpus.get(target_id)?;

    let mut hits: Vec<MatchHit> = corpus
        .entries()
        .filter(|(doc_id, _)| *doc_id != target_id)
        .map(|(doc_id, fp)| {
            let value = score(target, fp);
            MatchHit {
                doc_id: doc_id.to_string(),
                score: value,
                level: SimilarityLevel::from_score(value),
            }
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });

    if let Some(recorder) = metrics_recorder() {
        recorder.record_rank(target_id, start.elapsed(), hits.len());
    }

    Ok(hits)
}

/// Score every unordered pair of corpus documents once.
///
/// Pairs are emitted in lexicographic id order (`doc_a < doc_b`); scoring
/// reads immutable fingerprints only, so the pass needs no locks.
pub fn score_all_pairs(corpus: &Corpus) -> Vec<PairScore> {
    let mut entries: Vec<(&str, &Fingerprint)> = corpus.entries().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let n = entries.len();
    let mut out = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for (i, (id_a, fp_a)) in entries.iter().enumerate() {
        for (id_b, fp_b) in entries.iter().skip(i + 1) {
            let value = score(fp_a, fp_b);
            out.push(PairScore {
                doc_a: (*id_a).to_string(),
                doc_b: (*id_b).to_string(),
                score: value,
                level: SimilarityLevel::from_score(value),
            });
        }
    }
    out
}
