//! lexiscore - lexical complexity scoring for text corpora
//!
//! Tokenizes text samples, derives per-sample lexical metrics (average word
//! length, lexical diversity, rare-word frequency, syllable complexity),
//! folds them into a lexical complexity index (LCI) and compares the score
//! distributions of a human-authored and a model-generated corpus with a
//! one-sided Mann-Whitney U test and bootstrap confidence intervals.
//!
//! ```no_run
//! use lexiscore::config::LexiConfig;
//! use lexiscore::loader::{JsonDirLoader, PromptDirLoader};
//! use lexiscore::pipeline::ComparisonPipeline;
//!
//! let config = LexiConfig::default();
//! let human = PromptDirLoader::new("Data", "Data");
//! let synthetic = JsonDirLoader::new("QwenMax", "QwenMax");
//! let report = ComparisonPipeline::new(&config).run(&human, &synthetic);
//! println!("p = {:?}", report.comparison.p_value);
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod lexical;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod stats;
