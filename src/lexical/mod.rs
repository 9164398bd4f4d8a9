//! Lexical complexity pipeline
//!
//! Turns raw text into a single lexical complexity index (LCI):
//!
//! ```text
//! raw text ──► Tokenizer ──► MetricExtractor ──► CompositeScorer ──► LCI
//!              (tokens)      (WL, LD, FR, syl)   (weighted | syllable)
//! ```
//!
//! Every stage is a pure function of its inputs and configuration; nothing
//! here reads global state.

mod composite;
mod metrics;
mod tokenizer;

pub use composite::{CompositeScorer, CompositeWeights, ScoringMode};
pub use metrics::{
    average_word_length, count_syllables, lexical_diversity, rare_word_frequency,
    MetricExtractor, RareWordPolicy, DEFAULT_RARE_THRESHOLD, DEFAULT_VOWELS,
};
pub use tokenizer::{Tokenizer, DEFAULT_ALPHABET, DEFAULT_MIN_TOKEN_LENGTH};

use crate::config::LexiConfig;
use crate::models::{MetricVector, Score};

/// Full result of scoring one text
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub tokens: Vec<String>,
    pub metrics: MetricVector,
    pub score: Score,
}

impl TextAnalysis {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenizer + extractor + scorer bundled under one configuration
#[derive(Debug, Clone, Default)]
pub struct LexicalPipeline {
    tokenizer: Tokenizer,
    extractor: MetricExtractor,
    scorer: CompositeScorer,
}

impl LexicalPipeline {
    pub fn new(tokenizer: Tokenizer, extractor: MetricExtractor, scorer: CompositeScorer) -> Self {
        Self {
            tokenizer,
            extractor,
            scorer,
        }
    }

    pub fn from_config(config: &LexiConfig) -> Self {
        Self::new(
            Tokenizer::new(config.tokenizer.min_token_length, &config.tokenizer.alphabet),
            MetricExtractor::new(config.metrics.rare_word_policy(), &config.metrics.vowels),
            CompositeScorer::new(config.scoring.scoring_mode()),
        )
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn extractor(&self) -> &MetricExtractor {
        &self.extractor
    }

    pub fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    /// Run all three stages. Empty text yields zero metrics and a 0.0 score.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let tokens = self.tokenizer.tokenize(text);
        let metrics = self.extractor.extract(&tokens);
        let score = self.scorer.score(&metrics);
        TextAnalysis {
            tokens,
            metrics,
            score,
        }
    }
}
