//! Statistical comparison of two score populations
//!
//! - **Significance**: one-sided Mann-Whitney U ("a is stochastically
//!   greater than b"), exact for small untied samples, normal
//!   approximation otherwise.
//! - **Uncertainty**: percentile bootstrap CI of each corpus mean, seeded
//!   so the bounds are reproducible.
//!
//! Fewer than two scores in a list yields `None` for every result that
//! depends on it; nothing here returns an error.

mod bootstrap;
mod descriptive;
mod mann_whitney;

pub use bootstrap::{bootstrap_mean_ci, mean_with_ci, BootstrapConfig};
pub use descriptive::{mean, percentile_sorted, sample_stdev};
pub use mann_whitney::{mann_whitney_greater, MannWhitneyResult, EXACT_MAX_SAMPLE};

use crate::config::LexiConfig;
use crate::models::ComparisonResult;
use tracing::debug;

/// Compares two unpaired score lists
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalComparator {
    bootstrap: BootstrapConfig,
}

impl StatisticalComparator {
    pub fn new(bootstrap: BootstrapConfig) -> Self {
        Self { bootstrap }
    }

    pub fn from_config(config: &LexiConfig) -> Self {
        Self::new(BootstrapConfig::from(&config.statistics))
    }

    pub fn bootstrap_config(&self) -> &BootstrapConfig {
        &self.bootstrap
    }

    /// Run the significance test and both intervals.
    ///
    /// The three computations are independent and run on the rayon pool.
    pub fn compare(&self, a: &[f64], b: &[f64]) -> ComparisonResult {
        let (test, (ci_a, ci_b)) = rayon::join(
            || mann_whitney_greater(a, b),
            || {
                rayon::join(
                    || bootstrap_mean_ci(a, &self.bootstrap),
                    || bootstrap_mean_ci(b, &self.bootstrap),
                )
            },
        );

        match &test {
            Some(t) => debug!(
                "Mann-Whitney ({}): U = {:.1}, p = {:.6}",
                t.method, t.u_statistic, t.p_value
            ),
            None => debug!(
                "Mann-Whitney skipped: insufficient data (n_a = {}, n_b = {})",
                a.len(),
                b.len()
            ),
        }

        ComparisonResult {
            p_value: test.map(|t| t.p_value),
            u_statistic: test.map(|t| t.u_statistic),
            method: test.map(|t| t.method),
            ci_a,
            ci_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestMethod;

    fn fast() -> StatisticalComparator {
        StatisticalComparator::new(BootstrapConfig {
            resamples: 1_000,
            seed: 42,
            confidence_level: 0.95,
        })
    }

    #[test]
    fn test_insufficient_both() {
        let result = fast().compare(&[1.0], &[]);
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn test_insufficient_one_side() {
        let result = fast().compare(&[1.0, 2.0, 3.0], &[2.0]);
        assert!(result.p_value.is_none());
        assert!(result.ci_a.is_some());
        assert!(result.ci_b.is_none());
    }

    #[test]
    fn test_full_comparison() {
        let a = [2.1, 2.4, 2.2, 2.8, 2.6, 2.9, 3.0, 2.5, 2.7, 2.3];
        let b = [1.1, 1.3, 1.2, 1.6, 1.4, 1.5, 1.8, 1.7, 1.0, 1.9];
        let result = fast().compare(&a, &b);
        let p = result.p_value.unwrap();
        assert!(p < 0.001, "p = {}", p);
        assert_eq!(result.method, Some(TestMethod::Asymptotic));
        assert_eq!(result.u_statistic, Some(100.0));

        let ci_a = result.ci_a.unwrap();
        let ci_b = result.ci_b.unwrap();
        assert!(ci_a.low > ci_b.high);
    }

    #[test]
    fn test_deterministic() {
        let a = [2.1, 2.4, 2.2, 2.8];
        let b = [1.1, 2.3, 1.2, 2.6];
        assert_eq!(fast().compare(&a, &b), fast().compare(&a, &b));
    }

    #[test]
    fn test_from_config_uses_statistics_section() {
        let mut config = LexiConfig::default();
        config.statistics.seed = 99;
        config.statistics.resamples = 123;
        let comparator = StatisticalComparator::from_config(&config);
        assert_eq!(comparator.bootstrap_config().seed, 99);
        assert_eq!(comparator.bootstrap_config().resamples, 123);
    }
}
