//! CLI command definitions and handlers

mod compare;
mod init;
mod progress;
mod score;

use crate::config::{load_config_file, load_project_config, LexiConfig, RareWordsKind, ScoringModeKind};
use crate::lexical::CompositeWeights;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate a confidence level (0 < c < 1)
fn parse_confidence(s: &str) -> Result<f64, String> {
    let c: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if c > 0.0 && c < 1.0 {
        Ok(c)
    } else {
        Err("confidence level must be strictly between 0 and 1".to_string())
    }
}

/// Parse and validate a resample count (>= 1)
fn parse_resamples(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("resamples must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// lexiscore - lexical complexity of human vs. synthetic text
#[derive(Parser, Debug)]
#[command(name = "lexiscore")]
#[command(
    version,
    about = "Score the lexical complexity of two text corpora and compare them statistically",
    long_about = "lexiscore tokenizes every sample of a human-authored corpus and a \
model-generated corpus, computes a lexical complexity index (LCI) per sample from \
word length, lexical diversity and rare-word frequency, and compares the two score \
distributions with a one-sided Mann-Whitney U test and bootstrap confidence intervals.\n\n\
Run without a subcommand to compare the corpora under the current directory:\n  \
lexiscore .",
    after_help = "\
Examples:
  lexiscore .                                  Compare ./Data and ./QwenMax
  lexiscore compare --format json -o out.json  JSON report for plotting
  lexiscore compare --rare-words singleton     Hapax-based rare-word metric
  lexiscore compare --mode syllable            Syllables-per-word score
  lexiscore score \"Texto de exemplo\"            Score a single text
  lexiscore init                               Write an example lexiscore.toml"
)]
pub struct Cli {
    /// Working directory holding the corpora and config (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: lexiscore.toml or .lexiscorerc.json in PATH)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example lexiscore.toml into PATH
    Init,

    /// Score both corpora and compare them (default command)
    #[command(after_help = "\
Examples:
  lexiscore compare                                  Use config / defaults
  lexiscore compare --human-dir Data --synthetic-dir QwenMax
  lexiscore compare --weights 0.3,0.4,0.3            Explicit weights (WL,LD,FR)
  lexiscore compare --weights equal                  One third each
  lexiscore compare --resamples 2000 --seed 7        Faster, different seed")]
    Compare(CompareArgs),

    /// Score a single text and print its metrics
    Score {
        /// Text to score
        text: String,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// Options of the compare command; every value overrides the config file
#[derive(Args, Debug, Default, Clone)]
pub struct CompareArgs {
    /// Directory of <id>/prompt.xml samples (human corpus)
    #[arg(long)]
    pub human_dir: Option<String>,

    /// Directory of *.json samples (synthetic corpus)
    #[arg(long)]
    pub synthetic_dir: Option<String>,

    /// Minimum token length in characters
    #[arg(long)]
    pub min_token_length: Option<usize>,

    /// Rare-word policy: threshold, singleton
    #[arg(long)]
    pub rare_words: Option<RareWordsKind>,

    /// Length threshold for the threshold policy
    #[arg(long)]
    pub rare_threshold: Option<usize>,

    /// Composite mode: weighted, syllable
    #[arg(long)]
    pub mode: Option<ScoringModeKind>,

    /// Weights for WL,LD,FR (e.g. 0.3,0.4,0.3 or "equal")
    #[arg(long)]
    pub weights: Option<CompositeWeights>,

    /// Bootstrap resample count
    #[arg(long, value_parser = parse_resamples)]
    pub resamples: Option<usize>,

    /// Seed for the bootstrap generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Confidence level for the intervals (0 < c < 1)
    #[arg(long, value_parser = parse_confidence)]
    pub confidence: Option<f64>,

    /// Output format: text, json
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Disable progress spinners
    #[arg(long)]
    pub no_progress: bool,
}

impl CompareArgs {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply(&self, config: &mut LexiConfig) {
        if let Some(dir) = &self.human_dir {
            config.corpora.human_dir = dir.clone();
        }
        if let Some(dir) = &self.synthetic_dir {
            config.corpora.synthetic_dir = dir.clone();
        }
        if let Some(n) = self.min_token_length {
            config.tokenizer.min_token_length = n;
        }
        if let Some(kind) = self.rare_words {
            config.metrics.rare_words = kind;
        }
        if let Some(n) = self.rare_threshold {
            config.metrics.rare_threshold = n;
        }
        if let Some(mode) = self.mode {
            config.scoring.mode = mode;
        }
        if let Some(weights) = self.weights {
            config.scoring.weights = weights;
        }
        if let Some(n) = self.resamples {
            config.statistics.resamples = n;
        }
        if let Some(seed) = self.seed {
            config.statistics.seed = seed;
        }
        if let Some(c) = self.confidence {
            config.statistics.confidence_level = c;
        }
    }
}

/// Load configuration: explicit `--config` file, else project config in `path`
fn load_config(path: &Path, explicit: Option<&Path>) -> Result<LexiConfig> {
    match explicit {
        Some(file) => load_config_file(file)
            .with_context(|| format!("Failed to load config file {}", file.display())),
        None => Ok(load_project_config(path)),
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Compare(args)) => {
            let config = load_config(&cli.path, cli.config.as_deref())?;
            compare::run(&cli.path, config, &args)
        }

        Some(Commands::Score { text, format }) => {
            let config = load_config(&cli.path, cli.config.as_deref())?;
            score::run(&config, &text, &format)
        }

        None => {
            let config = load_config(&cli.path, cli.config.as_deref())?;
            compare::run(&cli.path, config, &CompareArgs::default())
        }
    }
}
