//! Configuration module for lexiscore
//!
//! This module handles:
//! - Project-level configuration (lexiscore.toml / .lexiscorerc.json)
//! - Tokenizer, metric and scoring settings for the lexical pipeline
//! - Bootstrap and significance-test settings
//! - Corpus directory names for the loaders

mod project_config;

pub use project_config::{
    load_config_file,
    load_project_config,
    CorporaConfig,
    LexiConfig,
    MetricsConfig,
    RareWordsKind,
    ScoringConfig,
    ScoringModeKind,
    StatisticsConfig,
    TokenizerConfig,
    EXAMPLE_CONFIG,
};

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("min_token_length must be at least 1")]
    ZeroMinTokenLength,

    #[error("alphabet must contain at least one letter")]
    EmptyAlphabet,

    #[error("weight '{name}' must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("rare_threshold must be at least 1")]
    ZeroRareThreshold,

    #[error("resamples must be at least 1")]
    ZeroResamples,

    #[error("confidence_level must be strictly between 0 and 1 (got {0})")]
    InvalidConfidenceLevel(f64),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
