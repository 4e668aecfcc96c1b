// Metrics hooks for the `wordfilter` crate.
//
// Callers install a global `FilterMetrics` implementation via
// [`set_filter_metrics`], then `filter_words` reports per-call latency and
// hit counts. This keeps instrumentation decoupled from any specific metrics
// backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for filter operations.
pub trait FilterMetrics: Send + Sync {
    /// Record the outcome of a single filter call.
    ///
    /// `words_checked` is the number of target words evaluated, `words_found`
    /// is how many of them were judged present, and `latency` is the
    /// wall-clock duration between the start and end of the call.
    fn record_filter(&self, words_checked: usize, words_found: usize, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn FilterMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn FilterMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn FilterMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global filter metrics recorder.
///
/// This is typically called once during service startup so all calls to
/// [`filter_words`](crate::filter_words) share the same metrics backend.
pub fn set_filter_metrics(recorder: Option<Arc<dyn FilterMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("filter metrics lock poisoned");
    *guard = recorder;
}
