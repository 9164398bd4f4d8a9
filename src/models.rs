//! Core data models for lexiscore
//!
//! Everything here is plain data: produced once by a pipeline stage and
//! never mutated afterwards. Reporters and the JSON output consume these
//! types directly.

use serde::{Deserialize, Serialize};

/// Composite lexical complexity index (LCI) of a single sample
pub type Score = f64;

/// A raw text sample handed to the core by a corpus loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSample {
    /// Name of the corpus the sample belongs to
    pub corpus: String,
    /// Identifier used for ordering and reporting (e.g. `prompt12`, `file.json#3`)
    pub sample_id: String,
    /// Untouched text as read by the loader
    pub raw_text: String,
}

impl TextSample {
    pub fn new(
        corpus: impl Into<String>,
        sample_id: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            corpus: corpus.into(),
            sample_id: sample_id.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// What a loader produced for one sample slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleRecord {
    /// Complete sample ready for scoring
    Loaded(TextSample),
    /// The loader found the slot but could not extract usable text
    Malformed { sample_id: String, reason: String },
}

impl SampleRecord {
    pub fn sample_id(&self) -> &str {
        match self {
            SampleRecord::Loaded(sample) => &sample.sample_id,
            SampleRecord::Malformed { sample_id, .. } => sample_id,
        }
    }
}

impl From<TextSample> for SampleRecord {
    fn from(sample: TextSample) -> Self {
        SampleRecord::Loaded(sample)
    }
}

/// Per-sample lexical metrics
///
/// - `wl`: average word length in characters (>= 0)
/// - `ld`: lexical diversity, distinct / total tokens (0..=1)
/// - `fr`: rare-word frequency under the configured policy (0..=1)
/// - `syllable_complexity`: average vowel runs per token (>= 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricVector {
    pub wl: f64,
    pub ld: f64,
    pub fr: f64,
    pub syllable_complexity: f64,
}

impl MetricVector {
    pub fn is_zero(&self) -> bool {
        self.wl == 0.0 && self.ld == 0.0 && self.fr == 0.0 && self.syllable_complexity == 0.0
    }
}

/// A sample that produced a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    pub sample_id: String,
    pub token_count: usize,
    pub metrics: MetricVector,
    pub score: Score,
}

/// Why a sample was left out of a corpus' score list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Text tokenized to an empty sequence
    Empty,
    /// Loader could not extract the text
    Malformed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty"),
            SkipReason::Malformed => write!(f, "malformed"),
        }
    }
}

/// Diagnostic entry for a skipped sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSample {
    pub sample_id: String,
    pub reason: SkipReason,
    /// Loader message for malformed samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Result of running one sample through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    Scored(ScoredSample),
    Skipped(SkippedSample),
}

impl SampleOutcome {
    pub fn sample_id(&self) -> &str {
        match self {
            SampleOutcome::Scored(s) => &s.sample_id,
            SampleOutcome::Skipped(s) => &s.sample_id,
        }
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            SampleOutcome::Scored(s) => Some(s.score),
            SampleOutcome::Skipped(_) => None,
        }
    }
}

/// Aggregated scores for one corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus_name: String,
    /// Scores in sample order
    pub scores: Vec<Score>,
    /// Per-sample detail, parallel to `scores`
    pub samples: Vec<ScoredSample>,
    /// Arithmetic mean; `None` when no sample produced a score
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `Some(0.0)` for a single score
    pub stdev: Option<f64>,
    pub skipped_count: usize,
    pub diagnostics: Vec<SkippedSample>,
}

impl CorpusStats {
    /// Number of samples that went through the pipeline (scored + skipped)
    pub fn processed(&self) -> usize {
        self.scores.len() + self.skipped_count
    }

    pub fn has_data(&self) -> bool {
        !self.scores.is_empty()
    }
}

/// Bootstrap confidence interval for a mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
    /// Confidence level, e.g. 0.95
    pub level: f64,
    pub resamples: usize,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// How a Mann-Whitney p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestMethod {
    /// Enumerated null distribution (small samples, no ties)
    Exact,
    /// Normal approximation with tie and continuity correction
    Asymptotic,
}

impl std::fmt::Display for TestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestMethod::Exact => write!(f, "exact"),
            TestMethod::Asymptotic => write!(f, "asymptotic"),
        }
    }
}

/// Statistical comparison of two corpora
///
/// `None` fields mean "insufficient data" (fewer than two scores).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One-sided p-value for "a is stochastically greater than b"
    pub p_value: Option<f64>,
    /// U statistic of sample `a`
    pub u_statistic: Option<f64>,
    pub method: Option<TestMethod>,
    pub ci_a: Option<ConfidenceInterval>,
    pub ci_b: Option<ConfidenceInterval>,
}

/// Settings echoed into reports so results can be reproduced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    pub min_token_length: usize,
    pub rare_word_policy: String,
    pub scoring_mode: String,
    pub resamples: usize,
    pub seed: u64,
    pub confidence_level: f64,
}

/// Everything the reporters render: both corpora and their comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Human-authored corpus (sample `a` of the test)
    pub human: CorpusStats,
    /// Model-generated corpus (sample `b` of the test)
    pub synthetic: CorpusStats,
    pub comparison: ComparisonResult,
    pub settings: ReportSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_vector_default_is_zero() {
        assert!(MetricVector::default().is_zero());
        let m = MetricVector {
            wl: 4.0,
            ..Default::default()
        };
        assert!(!m.is_zero());
    }

    #[test]
    fn test_sample_record_ids() {
        let loaded: SampleRecord = TextSample::new("Data", "prompt1", "texto").into();
        assert_eq!(loaded.sample_id(), "prompt1");

        let bad = SampleRecord::Malformed {
            sample_id: "a.json".to_string(),
            reason: "invalid JSON".to_string(),
        };
        assert_eq!(bad.sample_id(), "a.json");
    }

    #[test]
    fn test_confidence_interval_contains() {
        let ci = ConfidenceInterval {
            low: 1.0,
            high: 2.0,
            level: 0.95,
            resamples: 100,
        };
        assert!(ci.contains(1.5));
        assert!(ci.contains(1.0));
        assert!(!ci.contains(2.5));
        assert!((ci.width() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_comparison_result_serializes_missing_as_null() {
        let result = ComparisonResult::default();
        let json = serde_json::to_value(result).expect("serialize ComparisonResult");
        assert!(json["p_value"].is_null());
        assert!(json["ci_a"].is_null());
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Empty.to_string(), "empty");
        assert_eq!(SkipReason::Malformed.to_string(), "malformed");
    }
}
