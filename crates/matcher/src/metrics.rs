// Metrics hooks for the `matcher` crate.
//
// Callers install a global `SearchMetrics` implementation via [`set_search_metrics`],
// then every successful [`Matcher::search`](crate::Matcher::search) reports its
// mode, latency and hit counts. This keeps instrumentation decoupled from any
// specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchMode;

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of a search.
    ///
    /// `prompt_hits` and `question_hits` are the lengths of the two result
    /// lists returned to the caller.
    fn record_search(
        &self,
        mode: MatchMode,
        latency: Duration,
        prompt_hits: usize,
        question_hits: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// This is typically called once during service startup.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
