//! Progress spinners for corpus scoring

use crate::corpus::{SampleObserver, TracingObserver};
use crate::models::SampleOutcome;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {prefix:.bold} {pos} samples {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// One spinner per corpus; also forwards every sample to the debug log.
pub struct ProgressObserver {
    _multi: MultiProgress,
    bars: FxHashMap<String, ProgressBar>,
}

impl ProgressObserver {
    pub fn new(corpora: &[&str]) -> Self {
        let multi = MultiProgress::new();
        let style = create_spinner_style();
        let bars = corpora
            .iter()
            .map(|name| {
                let bar = multi.add(ProgressBar::new_spinner());
                bar.set_style(style.clone());
                bar.set_prefix(name.to_string());
                (name.to_string(), bar)
            })
            .collect();
        Self {
            _multi: multi,
            bars,
        }
    }
}

impl SampleObserver for ProgressObserver {
    fn on_sample(&self, corpus: &str, outcome: &SampleOutcome) {
        TracingObserver.on_sample(corpus, outcome);
        if let Some(bar) = self.bars.get(corpus) {
            bar.inc(1);
            bar.set_message(outcome.sample_id().to_string());
        }
    }

    fn on_corpus_done(&self, corpus: &str) {
        if let Some(bar) = self.bars.get(corpus) {
            bar.finish_with_message("done");
        }
    }
}
