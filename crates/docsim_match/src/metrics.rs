// Metrics hooks for the `docsim_match` crate.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`]; ranking entry points then report per-request latency
// and hit counts. This keeps instrumentation decoupled from any specific
// metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for ranking operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a one-vs-all ranking.
    ///
    /// `target_id` is the document the corpus was ranked against, `latency`
    /// the wall-clock duration of the scoring pass, and `hit_count` the
    /// number of compared documents.
    fn record_rank(&self, target_id: &str, latency: Duration, hit_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during startup so every ranking call shares the same
/// metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
