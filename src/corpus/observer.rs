//! Progress observers for corpus aggregation

use crate::models::SampleOutcome;
use tracing::debug;

/// Notified once per processed sample, in sample order.
///
/// Must be `Sync`: the two corpora are aggregated on separate rayon tasks
/// and may share one observer.
pub trait SampleObserver: Sync {
    fn on_sample(&self, corpus: &str, outcome: &SampleOutcome);

    /// Called once after the last sample of a corpus
    fn on_corpus_done(&self, _corpus: &str) {}
}

/// Ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SampleObserver for NoopObserver {
    fn on_sample(&self, _corpus: &str, _outcome: &SampleOutcome) {}
}

/// Logs every sample at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SampleObserver for TracingObserver {
    fn on_sample(&self, corpus: &str, outcome: &SampleOutcome) {
        match outcome {
            SampleOutcome::Scored(s) => debug!(
                "{}/{:<20} LCI: {:.4} (WL={:.2}, LD={:.4}, FR={:.4})",
                corpus, s.sample_id, s.score, s.metrics.wl, s.metrics.ld, s.metrics.fr
            ),
            SampleOutcome::Skipped(s) => {
                debug!("{}/{} skipped ({})", corpus, s.sample_id, s.reason)
            }
        }
    }
}
