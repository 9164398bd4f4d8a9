//! Text (terminal) reporter

use crate::models::{ComparisonReport, ConfidenceInterval, CorpusStats};
use anyhow::Result;
use console::style;
use std::fmt::Write;

const RULE: &str = "======================================================================";
const NO_DATA: &str = "insufficient data";

/// Render report as formatted terminal output
pub fn render(report: &ComparisonReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", style("Lexical Complexity Index (LCI)").bold())?;
    writeln!(
        out,
        "{}",
        style(format!(
            "mode: {}  rare words: {}  min token length: {}",
            report.settings.scoring_mode,
            report.settings.rare_word_policy,
            report.settings.min_token_length
        ))
        .dim()
    )?;

    render_samples(&mut out, &report.human)?;
    render_samples(&mut out, &report.synthetic)?;

    render_summary(&mut out, &report.human, report.comparison.ci_a.as_ref())?;
    render_summary(&mut out, &report.synthetic, report.comparison.ci_b.as_ref())?;

    writeln!(out, "\n{}", RULE)?;
    writeln!(
        out,
        "{}",
        style(format!(
            "Mann-Whitney U: {} > {} (one-sided)",
            report.human.corpus_name, report.synthetic.corpus_name
        ))
        .bold()
    )?;
    writeln!(out, "{}", RULE)?;
    match (report.comparison.p_value, report.comparison.u_statistic) {
        (Some(p), Some(u)) => {
            let method = report
                .comparison
                .method
                .map(|m| m.to_string())
                .unwrap_or_default();
            writeln!(out, "U statistic:    {:.1}", u)?;
            writeln!(out, "p-value:        {:.6} ({})", p, method)?;
        }
        _ => writeln!(out, "p-value:        {}", style(NO_DATA).yellow())?,
    }

    Ok(out)
}

fn render_samples(out: &mut String, corpus: &CorpusStats) -> Result<()> {
    writeln!(out, "\n{}", style(&corpus.corpus_name).cyan().bold())?;
    for s in &corpus.samples {
        writeln!(
            out,
            "{:<20} - LCI: {:.4} (WL={:.2}, LD={:.4}, FR={:.4})",
            s.sample_id, s.score, s.metrics.wl, s.metrics.ld, s.metrics.fr
        )?;
    }
    for d in &corpus.diagnostics {
        let detail = d.detail.as_deref().map(|m| format!(": {}", m)).unwrap_or_default();
        writeln!(
            out,
            "{}",
            style(format!("{:<20} - skipped ({}{})", d.sample_id, d.reason, detail)).dim()
        )?;
    }
    Ok(())
}

fn render_summary(
    out: &mut String,
    corpus: &CorpusStats,
    ci: Option<&ConfidenceInterval>,
) -> Result<()> {
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "{}", style(format!("Dataset {}", corpus.corpus_name)).bold())?;
    writeln!(out, "{}", RULE)?;

    let (Some(mean), Some(stdev)) = (corpus.mean, corpus.stdev) else {
        writeln!(
            out,
            "No samples processed ({} skipped).",
            corpus.skipped_count
        )?;
        return Ok(());
    };

    writeln!(out, "Samples:        {}", corpus.scores.len())?;
    writeln!(out, "Skipped:        {}", corpus.skipped_count)?;
    writeln!(out, "LCI mean:       {:.4}", mean)?;
    writeln!(out, "Std deviation:  {:.4}", stdev)?;
    match ci {
        Some(ci) => writeln!(
            out,
            "{:.0}% CI:         [{:.4}, {:.4}] ({} resamples)",
            ci.level * 100.0,
            ci.low,
            ci.high,
            ci.resamples
        )?,
        None => writeln!(out, "CI:             {}", style(NO_DATA).yellow())?,
    }
    Ok(())
}
