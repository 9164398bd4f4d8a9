//! Corpus comparison pipeline
//!
//! Orchestrates a full run:
//! 1. Load both corpora (independently, in parallel)
//! 2. Score every sample and aggregate per corpus
//! 3. Compare the two score lists (Mann-Whitney + bootstrap CIs)
//!
//! The human corpus is sample `a` of the test, so a small p-value means
//! human-authored text scores higher than the synthetic text.

use crate::config::LexiConfig;
use crate::corpus::{CorpusAggregator, NoopObserver, SampleObserver};
use crate::lexical::LexicalPipeline;
use crate::loader::CorpusLoader;
use crate::models::{ComparisonReport, CorpusStats, ReportSettings};
use crate::stats::StatisticalComparator;
use tracing::info;

pub struct ComparisonPipeline<'a> {
    config: &'a LexiConfig,
    lexical: LexicalPipeline,
    comparator: StatisticalComparator,
    observer: &'a dyn SampleObserver,
}

impl<'a> ComparisonPipeline<'a> {
    /// Build a pipeline from an already validated configuration.
    pub fn new(config: &'a LexiConfig) -> Self {
        Self {
            config,
            lexical: LexicalPipeline::from_config(config),
            comparator: StatisticalComparator::from_config(config),
            observer: &NoopObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn SampleObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn lexical(&self) -> &LexicalPipeline {
        &self.lexical
    }

    /// Load and aggregate one corpus.
    pub fn score_corpus(&self, loader: &dyn CorpusLoader) -> CorpusStats {
        let records = loader.load();
        CorpusAggregator::new(&self.lexical)
            .with_observer(self.observer)
            .aggregate_records(loader.corpus_name(), &records)
    }

    /// Score both corpora and compare them.
    pub fn run(&self, human: &dyn CorpusLoader, synthetic: &dyn CorpusLoader) -> ComparisonReport {
        let (human, synthetic) = rayon::join(
            || self.score_corpus(human),
            || self.score_corpus(synthetic),
        );
        self.compare(human, synthetic)
    }

    /// Compare two already aggregated corpora.
    pub fn compare(&self, human: CorpusStats, synthetic: CorpusStats) -> ComparisonReport {
        let comparison = self.comparator.compare(&human.scores, &synthetic.scores);

        match comparison.p_value {
            Some(p) => info!(
                "Compared {} (n={}) vs {} (n={}): p = {:.6}",
                human.corpus_name,
                human.scores.len(),
                synthetic.corpus_name,
                synthetic.scores.len(),
                p
            ),
            None => info!(
                "Compared {} (n={}) vs {} (n={}): insufficient data for a test",
                human.corpus_name,
                human.scores.len(),
                synthetic.corpus_name,
                synthetic.scores.len()
            ),
        }

        ComparisonReport {
            human,
            synthetic,
            comparison,
            settings: self.settings(),
        }
    }

    fn settings(&self) -> ReportSettings {
        ReportSettings {
            min_token_length: self.lexical.tokenizer().min_token_length(),
            rare_word_policy: self.lexical.extractor().rare_word_policy().to_string(),
            scoring_mode: self.lexical.scorer().mode().to_string(),
            resamples: self.config.statistics.resamples,
            seed: self.config.statistics.seed,
            confidence_level: self.config.statistics.confidence_level,
        }
    }
}
