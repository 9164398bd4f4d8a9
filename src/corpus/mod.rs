//! Corpus aggregation
//!
//! Runs every sample of a corpus through the lexical pipeline and folds the
//! results into a [`CorpusStats`]. Samples whose text tokenizes to nothing
//! are skipped rather than scored as 0.0, so degenerate samples do not pull
//! the mean down. Malformed loader records are skipped the same way and
//! listed in `diagnostics`.

mod observer;

pub use observer::{NoopObserver, SampleObserver, TracingObserver};

use crate::lexical::LexicalPipeline;
use crate::models::{
    CorpusStats, SampleOutcome, SampleRecord, ScoredSample, SkipReason, SkippedSample, TextSample,
};
use crate::stats::{mean, sample_stdev};
use tracing::{info, warn};

/// Applies a [`LexicalPipeline`] to whole corpora.
pub struct CorpusAggregator<'a> {
    pipeline: &'a LexicalPipeline,
    observer: &'a dyn SampleObserver,
}

impl<'a> CorpusAggregator<'a> {
    pub fn new(pipeline: &'a LexicalPipeline) -> Self {
        Self {
            pipeline,
            observer: &NoopObserver,
        }
    }

    /// Report each processed sample to `observer`.
    pub fn with_observer(mut self, observer: &'a dyn SampleObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Score a single sample.
    pub fn process_sample(&self, sample: &TextSample) -> SampleOutcome {
        let analysis = self.pipeline.analyze(&sample.raw_text);
        if analysis.is_empty() {
            return SampleOutcome::Skipped(SkippedSample {
                sample_id: sample.sample_id.clone(),
                reason: SkipReason::Empty,
                detail: None,
            });
        }
        SampleOutcome::Scored(ScoredSample {
            sample_id: sample.sample_id.clone(),
            token_count: analysis.tokens.len(),
            metrics: analysis.metrics,
            score: analysis.score,
        })
    }

    /// Aggregate already-loaded samples, in the given order.
    pub fn aggregate(&self, corpus_name: &str, samples: &[TextSample]) -> CorpusStats {
        self.fold(corpus_name, samples.iter().map(|s| self.process_sample(s)))
    }

    /// Aggregate loader output, counting malformed records as skipped.
    pub fn aggregate_records(&self, corpus_name: &str, records: &[SampleRecord]) -> CorpusStats {
        let outcomes = records.iter().map(|record| match record {
            SampleRecord::Loaded(sample) => self.process_sample(sample),
            SampleRecord::Malformed { sample_id, reason } => {
                warn!("{}: skipping malformed sample {}: {}", corpus_name, sample_id, reason);
                SampleOutcome::Skipped(SkippedSample {
                    sample_id: sample_id.clone(),
                    reason: SkipReason::Malformed,
                    detail: Some(reason.clone()),
                })
            }
        });
        self.fold(corpus_name, outcomes)
    }

    fn fold(&self, corpus_name: &str, outcomes: impl Iterator<Item = SampleOutcome>) -> CorpusStats {
        let mut samples = Vec::new();
        let mut diagnostics = Vec::new();

        for outcome in outcomes {
            self.observer.on_sample(corpus_name, &outcome);
            match outcome {
                SampleOutcome::Scored(scored) => samples.push(scored),
                SampleOutcome::Skipped(skipped) => diagnostics.push(skipped),
            }
        }
        self.observer.on_corpus_done(corpus_name);

        let scores: Vec<f64> = samples.iter().map(|s| s.score).collect();
        let stats = CorpusStats {
            corpus_name: corpus_name.to_string(),
            mean: mean(&scores),
            stdev: sample_stdev(&scores),
            skipped_count: diagnostics.len(),
            scores,
            samples,
            diagnostics,
        };

        info!(
            "{}: scored {} samples, skipped {}",
            stats.corpus_name,
            stats.scores.len(),
            stats.skipped_count
        );
        stats
    }
}
