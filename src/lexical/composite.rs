//! Composite lexical complexity index (LCI)
//!
//! ```text
//! weighted:  LCI = w_wl × WL + w_ld × LD + w_fr × FR
//! syllable:  LCI = average syllables per token
//! ```

use crate::models::{MetricVector, Score};
use serde::{Deserialize, Serialize};

/// Weights for the three metrics of the `weighted` mode
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CompositeWeights {
    /// Weight of average word length (default: 0.3)
    #[serde(default = "default_wl_weight")]
    pub wl: f64,

    /// Weight of lexical diversity (default: 0.4)
    #[serde(default = "default_ld_weight")]
    pub ld: f64,

    /// Weight of rare-word frequency (default: 0.3)
    #[serde(default = "default_fr_weight")]
    pub fr: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            wl: default_wl_weight(),
            ld: default_ld_weight(),
            fr: default_fr_weight(),
        }
    }
}

fn default_wl_weight() -> f64 {
    0.3
}
fn default_ld_weight() -> f64 {
    0.4
}
fn default_fr_weight() -> f64 {
    0.3
}

impl CompositeWeights {
    pub fn new(wl: f64, ld: f64, fr: f64) -> Self {
        Self { wl, ld, fr }
    }

    /// One third for each metric
    pub fn equal() -> Self {
        let third = 1.0 / 3.0;
        Self::new(third, third, third)
    }

    pub fn sum(&self) -> f64 {
        self.wl + self.ld + self.fr
    }
}

impl std::str::FromStr for CompositeWeights {
    type Err = String;

    /// Parse `"0.3,0.4,0.3"` (or `"equal"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("equal") {
            return Ok(Self::equal());
        }
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("'{}' is not a valid weight", p.trim()))
            })
            .collect::<Result<_, _>>()?;
        match parts.as_slice() {
            [wl, ld, fr] => Ok(Self::new(*wl, *ld, *fr)),
            _ => Err(format!(
                "expected three comma-separated weights (WL,LD,FR), got {}",
                parts.len()
            )),
        }
    }
}

/// How a metric vector is collapsed into one score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMode {
    Weighted(CompositeWeights),
    Syllable,
}

impl Default for ScoringMode {
    fn default() -> Self {
        ScoringMode::Weighted(CompositeWeights::default())
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMode::Weighted(w) => {
                write!(f, "weighted(wl={:.3}, ld={:.3}, fr={:.3})", w.wl, w.ld, w.fr)
            }
            ScoringMode::Syllable => write!(f, "syllable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    mode: ScoringMode,
}

impl CompositeScorer {
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    pub fn score(&self, metrics: &MetricVector) -> Score {
        match self.mode {
            ScoringMode::Weighted(w) => w.wl * metrics.wl + w.ld * metrics.ld + w.fr * metrics.fr,
            ScoringMode::Syllable => metrics.syllable_complexity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_metrics_score_zero() {
        let zero = MetricVector::default();
        assert_eq!(CompositeScorer::default().score(&zero), 0.0);
        assert_eq!(CompositeScorer::new(ScoringMode::Syllable).score(&zero), 0.0);
        assert_eq!(
            CompositeScorer::new(ScoringMode::Weighted(CompositeWeights::equal())).score(&zero),
            0.0
        );
    }

    #[test]
    fn test_weighted_reference_scenario() {
        // tokens ["casa", "casa", "livro"]
        let metrics = MetricVector {
            wl: 13.0 / 3.0,
            ld: 2.0 / 3.0,
            fr: 1.0 / 3.0,
            syllable_complexity: 2.0,
        };
        let score = CompositeScorer::default().score(&metrics);
        assert!((score - 1.6667).abs() < 1e-3, "got {}", score);
    }

    #[test]
    fn test_syllable_mode_uses_syllables_only() {
        let metrics = MetricVector {
            wl: 10.0,
            ld: 1.0,
            fr: 1.0,
            syllable_complexity: 2.5,
        };
        assert_eq!(CompositeScorer::new(ScoringMode::Syllable).score(&metrics), 2.5);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((CompositeWeights::default().sum() - 1.0).abs() < 1e-12);
        assert!((CompositeWeights::equal().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_weights() {
        let w: CompositeWeights = "0.5, 0.25,0.25".parse().unwrap();
        assert_eq!(w, CompositeWeights::new(0.5, 0.25, 0.25));
        assert_eq!("equal".parse::<CompositeWeights>().unwrap(), CompositeWeights::equal());
        assert!("0.5,0.5".parse::<CompositeWeights>().is_err());
        assert!("a,b,c".parse::<CompositeWeights>().is_err());
    }
}
