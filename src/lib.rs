//! Workspace umbrella crate for Docsim.
//!
//! This crate stitches the pipeline stages together so callers can go from
//! raw document text to similarity percentages with a single API entry point:
//! normalization (`docsim_canonical`), fingerprinting (`docsim_fingerprint`),
//! corpus ownership (`docsim_corpus`) and scoring (`docsim_match`).
//!
//! ```
//! use docsim::{compare_texts, FingerprintConfig, NormalizeConfig};
//!
//! let normalize_cfg = NormalizeConfig::default();
//! let fingerprint_cfg = FingerprintConfig::default();
//!
//! let pct = compare_texts(
//!     "Привет мир тестовый документ",
//!     "Привет мир тестовый документ",
//!     &normalize_cfg,
//!     &fingerprint_cfg,
//! )
//! .expect("pipeline");
//! assert_eq!(pct, 100.0);
//! ```

pub mod config;

pub use docsim_canonical::{
    content_tokens, normalize, NormalizeConfig, NormalizeError, StopWordSet,
};
pub use docsim_corpus::{Corpus, CorpusError};
pub use docsim_fingerprint::{
    fingerprint, Fingerprint, FingerprintConfig, FingerprintError, FingerprintMeta, RollingHash,
};
pub use docsim_match::{
    rank_against, score, score_all_pairs, score_hashes, set_match_metrics, MatchError, MatchHit,
    MatchMetrics, PairScore, SimilarityLevel,
};

pub use config::{ConfigLoadError, DocsimConfig};

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Errors that can occur while running text through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Normalize(NormalizeError),
    Fingerprint(FingerprintError),
    Corpus(CorpusError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Normalize(err) => write!(f, "normalization failure: {err}"),
            PipelineError::Fingerprint(err) => write!(f, "fingerprinting failure: {err}"),
            PipelineError::Corpus(err) => write!(f, "corpus failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Normalize(err) => Some(err),
            PipelineError::Fingerprint(err) => Some(err),
            PipelineError::Corpus(err) => Some(err),
        }
    }
}

impl From<NormalizeError> for PipelineError {
    fn from(value: NormalizeError) -> Self {
        PipelineError::Normalize(value)
    }
}

impl From<FingerprintError> for PipelineError {
    fn from(value: FingerprintError) -> Self {
        PipelineError::Fingerprint(value)
    }
}

impl From<CorpusError> for PipelineError {
    fn from(value: CorpusError) -> Self {
        PipelineError::Corpus(value)
    }
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_normalize(&self, latency: Duration, result: Result<(), NormalizeError>);
    fn record_fingerprint(&self, latency: Duration, result: Result<(), FingerprintError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_normalize(self, result: Result<(), NormalizeError>) {
        self.recorder.record_normalize(self.start.elapsed(), result);
    }

    fn record_fingerprint(self, result: Result<(), FingerprintError>) {
        self.recorder
            .record_fingerprint(self.start.elapsed(), result);
    }
}

/// Run one document through normalization and fingerprinting with explicit
/// configuration. Degenerate documents come back as empty fingerprints.
pub fn fingerprint_text(
    raw_text: &str,
    normalize_cfg: &NormalizeConfig,
    fingerprint_cfg: &FingerprintConfig,
) -> Result<Fingerprint, PipelineError> {
    let normalize_span = MetricsSpan::start();
    let stream = match normalize(raw_text, normalize_cfg) {
        Ok(stream) => {
            if let Some(span) = normalize_span {
                span.record_normalize(Ok(()));
            }
            stream
        }
        Err(err) => {
            if let Some(span) = normalize_span {
                span.record_normalize(Err(err.clone()));
            }
            return Err(err.into());
        }
    };

    let fingerprint_span = MetricsSpan::start();
    match fingerprint(&stream, fingerprint_cfg) {
        Ok(fp) => {
            if let Some(span) = fingerprint_span {
                span.record_fingerprint(Ok(()));
            }
            Ok(fp)
        }
        Err(err) => {
            if let Some(span) = fingerprint_span {
                span.record_fingerprint(Err(err.clone()));
            }
            Err(err.into())
        }
    }
}

/// Fingerprint both texts and return their overlap percentage.
pub fn compare_texts(
    text_a: &str,
    text_b: &str,
    normalize_cfg: &NormalizeConfig,
    fingerprint_cfg: &FingerprintConfig,
) -> Result<f64, PipelineError> {
    let fp_a = fingerprint_text(text_a, normalize_cfg, fingerprint_cfg)?;
    let fp_b = fingerprint_text(text_b, normalize_cfg, fingerprint_cfg)?;
    Ok(score(&fp_a, &fp_b))
}
