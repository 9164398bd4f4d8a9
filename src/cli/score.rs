//! Score command - metrics for a single text

use crate::config::LexiConfig;
use crate::lexical::LexicalPipeline;
use anyhow::{Context, Result};
use console::style;

/// Run the score command
pub fn run(config: &LexiConfig, text: &str, format: &str) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let pipeline = LexicalPipeline::from_config(config);
    let analysis = pipeline.analyze(text);

    if format == "json" {
        let value = serde_json::json!({
            "tokens": analysis.tokens,
            "metrics": analysis.metrics,
            "score": analysis.score,
            "scoring_mode": pipeline.scorer().mode().to_string(),
            "rare_word_policy": pipeline.extractor().rare_word_policy().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if analysis.is_empty() {
        println!("{} No tokens extracted; LCI = 0.0000", style("!").yellow());
        return Ok(());
    }

    let m = &analysis.metrics;
    println!("{} {}", style("Tokens:").bold(), analysis.tokens.len());
    println!("WL  (average word length):   {:.4}", m.wl);
    println!("LD  (lexical diversity):     {:.4}", m.ld);
    println!("FR  (rare words, {}): {:.4}", pipeline.extractor().rare_word_policy(), m.fr);
    println!("Syllables per token:         {:.4}", m.syllable_complexity);
    println!(
        "{} {:.4}  ({})",
        style("LCI:").bold(),
        analysis.score,
        pipeline.scorer().mode()
    );
    Ok(())
}
