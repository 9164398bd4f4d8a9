//! Project-level configuration support
//!
//! Loads configuration from `lexiscore.toml` or `.lexiscorerc.json` in the
//! working directory. Every field has a default, so an empty file (or no
//! file at all) reproduces the reference setup.
//!
//! # Configuration Format
//!
//! ```toml
//! # lexiscore.toml
//!
//! [tokenizer]
//! min_token_length = 3
//!
//! [metrics]
//! rare_words = "threshold"   # or "singleton"
//! rare_threshold = 5
//!
//! [scoring]
//! mode = "weighted"          # or "syllable"
//! weights = { wl = 0.3, ld = 0.4, fr = 0.3 }
//!
//! [statistics]
//! resamples = 10000
//! seed = 42
//! confidence_level = 0.95
//!
//! [corpora]
//! human_dir = "Data"
//! synthetic_dir = "QwenMax"
//! ```

use super::ConfigError;
use crate::lexical::{CompositeWeights, RareWordPolicy, ScoringMode, DEFAULT_ALPHABET, DEFAULT_VOWELS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Example file written by `lexiscore init`
pub const EXAMPLE_CONFIG: &str = r#"# lexiscore configuration

[tokenizer]
# Shortest word (in characters) kept as a token
min_token_length = 3
# Letters that may appear inside a token; everything else is a separator.
# alphabet = "abcdefghijklmnopqrstuvwxyzßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ"

[metrics]
# "threshold": rare = length >= rare_threshold
# "singleton": rare = occurs exactly once in the sample
rare_words = "threshold"
rare_threshold = 5
# vowels = "aeiouáàâãäåéèêëíìîïóòôõöúùûü"

[scoring]
# "weighted": LCI = wl*WL + ld*LD + fr*FR
# "syllable": LCI = average syllables per token
mode = "weighted"
weights = { wl = 0.3, ld = 0.4, fr = 0.3 }

[statistics]
resamples = 10000
seed = 42
confidence_level = 0.95

[corpora]
human_dir = "Data"
human_name = "Data"
synthetic_dir = "QwenMax"
synthetic_name = "QwenMax"
"#;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LexiConfig {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub statistics: StatisticsConfig,

    #[serde(default)]
    pub corpora: CorporaConfig,
}

impl LexiConfig {
    /// Check every value the core relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tokenizer.min_token_length == 0 {
            return Err(ConfigError::ZeroMinTokenLength);
        }
        if self.tokenizer.alphabet.trim().is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.metrics.rare_words == RareWordsKind::Threshold && self.metrics.rare_threshold == 0 {
            return Err(ConfigError::ZeroRareThreshold);
        }
        if self.scoring.mode == ScoringModeKind::Weighted {
            let w = &self.scoring.weights;
            for (name, value) in [("wl", w.wl), ("ld", w.ld), ("fr", w.fr)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidWeight { name, value });
                }
            }
        }
        if self.statistics.resamples == 0 {
            return Err(ConfigError::ZeroResamples);
        }
        let level = self.statistics.confidence_level;
        if !(level > 0.0 && level < 1.0) {
            return Err(ConfigError::InvalidConfidenceLevel(level));
        }
        Ok(())
    }
}

/// Token extraction settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenizerConfig {
    /// Minimum token length in characters (default: 3)
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,

    /// Letters allowed inside tokens (matched after lower-casing)
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_length: default_min_token_length(),
            alphabet: default_alphabet(),
        }
    }
}

fn default_min_token_length() -> usize {
    3
}
fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

/// Which rare-word definition to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RareWordsKind {
    /// Length-based: token length >= threshold
    #[default]
    Threshold,
    /// Frequency-based: token occurs once in the sample
    Singleton,
}

impl std::str::FromStr for RareWordsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "threshold" | "length" => Ok(RareWordsKind::Threshold),
            "singleton" | "hapax" => Ok(RareWordsKind::Singleton),
            _ => Err(format!(
                "Unknown rare-word policy '{}'. Valid policies: threshold, singleton",
                s
            )),
        }
    }
}

/// Metric extraction settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub rare_words: RareWordsKind,

    /// Length threshold for the `threshold` policy (default: 5)
    #[serde(default = "default_rare_threshold")]
    pub rare_threshold: usize,

    /// Vowels used by the syllable heuristic
    #[serde(default = "default_vowels")]
    pub vowels: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            rare_words: RareWordsKind::default(),
            rare_threshold: default_rare_threshold(),
            vowels: default_vowels(),
        }
    }
}

impl MetricsConfig {
    pub fn rare_word_policy(&self) -> RareWordPolicy {
        match self.rare_words {
            RareWordsKind::Threshold => RareWordPolicy::Threshold {
                min_length: self.rare_threshold,
            },
            RareWordsKind::Singleton => RareWordPolicy::Singleton,
        }
    }
}

fn default_rare_threshold() -> usize {
    5
}
fn default_vowels() -> String {
    DEFAULT_VOWELS.to_string()
}

/// Composite formula selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringModeKind {
    #[default]
    Weighted,
    Syllable,
}

impl std::str::FromStr for ScoringModeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted" => Ok(ScoringModeKind::Weighted),
            "syllable" | "syllables" => Ok(ScoringModeKind::Syllable),
            _ => Err(format!(
                "Unknown scoring mode '{}'. Valid modes: weighted, syllable",
                s
            )),
        }
    }
}

/// Composite score settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub mode: ScoringModeKind,

    /// Weights for the `weighted` mode (default: 0.3 / 0.4 / 0.3)
    #[serde(default)]
    pub weights: CompositeWeights,
}

impl ScoringConfig {
    pub fn scoring_mode(&self) -> ScoringMode {
        match self.mode {
            ScoringModeKind::Weighted => ScoringMode::Weighted(self.weights),
            ScoringModeKind::Syllable => ScoringMode::Syllable,
        }
    }
}

/// Bootstrap / significance settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatisticsConfig {
    /// Bootstrap resample count (default: 10000)
    #[serde(default = "default_resamples")]
    pub resamples: usize,

    /// Seed for the resampling generator (default: 42)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Confidence level for the intervals (default: 0.95)
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            resamples: default_resamples(),
            seed: default_seed(),
            confidence_level: default_confidence_level(),
        }
    }
}

fn default_resamples() -> usize {
    10_000
}
fn default_seed() -> u64 {
    42
}
fn default_confidence_level() -> f64 {
    0.95
}

/// Where the two corpora live and how they are labelled in reports
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorporaConfig {
    /// Directory of `<id>/prompt.xml` samples (default: "Data")
    #[serde(default = "default_human_dir")]
    pub human_dir: String,

    #[serde(default = "default_human_dir")]
    pub human_name: String,

    /// Directory of `*.json` samples (default: "QwenMax")
    #[serde(default = "default_synthetic_dir")]
    pub synthetic_dir: String,

    #[serde(default = "default_synthetic_dir")]
    pub synthetic_name: String,
}

impl Default for CorporaConfig {
    fn default() -> Self {
        Self {
            human_dir: default_human_dir(),
            human_name: default_human_dir(),
            synthetic_dir: default_synthetic_dir(),
            synthetic_name: default_synthetic_dir(),
        }
    }
}

fn default_human_dir() -> String {
    "Data".to_string()
}
fn default_synthetic_dir() -> String {
    "QwenMax".to_string()
}

/// Load project configuration from a directory
///
/// Searches for `lexiscore.toml`, then `.lexiscorerc.json`.
/// Unreadable files are logged and skipped; defaults are returned when
/// nothing usable is found.
pub fn load_project_config(dir: &Path) -> LexiConfig {
    let toml_path = dir.join("lexiscore.toml");
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(".lexiscorerc.json");
    if json_path.exists() {
        match load_config_file(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    LexiConfig::default()
}

/// Load a specific config file; the format follows the extension
pub fn load_config_file(path: &Path) -> Result<LexiConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}
