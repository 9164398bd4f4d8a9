//! Compare command - score both corpora and test the difference

use super::progress::ProgressObserver;
use super::CompareArgs;
use crate::config::LexiConfig;
use crate::corpus::{SampleObserver, TracingObserver};
use crate::loader::{CorpusLoader, JsonDirLoader, PromptDirLoader};
use crate::pipeline::ComparisonPipeline;
use crate::reporters;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::info;

/// Run the compare command
pub fn run(path: &Path, mut config: LexiConfig, args: &CompareArgs) -> Result<()> {
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let format = args.format.as_deref().unwrap_or("text");
    let human = PromptDirLoader::new(
        config.corpora.human_name.clone(),
        path.join(&config.corpora.human_dir),
    );
    let synthetic = JsonDirLoader::new(
        config.corpora.synthetic_name.clone(),
        path.join(&config.corpora.synthetic_dir),
    );
    info!(
        "Comparing {} ({}) with {} ({})",
        human.corpus_name(),
        human.dir().display(),
        synthetic.corpus_name(),
        synthetic.dir().display()
    );

    // Spinners only make sense on an interactive terminal
    let show_progress = !args.no_progress && console::user_attended_stderr();
    let progress;
    let observer: &dyn SampleObserver = if show_progress {
        progress = ProgressObserver::new(&[
            config.corpora.human_name.as_str(),
            config.corpora.synthetic_name.as_str(),
        ]);
        &progress
    } else {
        &TracingObserver
    };

    let report = ComparisonPipeline::new(&config)
        .with_observer(observer)
        .run(&human, &synthetic);

    let rendered = reporters::report(&report, format)?;

    match &args.output {
        Some(out) => {
            std::fs::write(out, &rendered)
                .with_context(|| format!("Failed to write report to {}", out.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(out.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
