//! One-sided Mann-Whitney U test
//!
//! Alternative hypothesis: values of `a` tend to be larger than values of `b`.
//!
//! ```text
//! U_a = R_a - n_a (n_a + 1) / 2          (R_a = rank sum of a, midranks for ties)
//!
//! exact:       p = P(U >= U_a)           (both n <= 8, no ties)
//! asymptotic:  z = (U_a - n_a n_b / 2 - 0.5) / σ
//!              σ² = n_a n_b / 12 × ((N + 1) - Σ(t³ - t) / (N (N - 1)))
//!              p = 1 - Φ(z)
//! ```

use crate::models::TestMethod;

/// Largest per-group size for which the exact null distribution is used
pub const EXACT_MAX_SAMPLE: usize = 8;

/// Minimum observations per group
pub const MIN_OBSERVATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitneyResult {
    /// U statistic of the first sample
    pub u_statistic: f64,
    /// One-sided p-value in [0, 1]
    pub p_value: f64,
    pub method: TestMethod,
}

/// Test whether `a` is stochastically greater than `b`.
///
/// Returns `None` when either sample has fewer than two observations.
pub fn mann_whitney_greater(a: &[f64], b: &[f64]) -> Option<MannWhitneyResult> {
    if a.len() < MIN_OBSERVATIONS || b.len() < MIN_OBSERVATIONS {
        return None;
    }

    let n_a = a.len();
    let n_b = b.len();
    let ranked = rank_samples(a, b);

    let u_statistic = ranked.rank_sum_a - (n_a * (n_a + 1)) as f64 / 2.0;

    if n_a <= EXACT_MAX_SAMPLE && n_b <= EXACT_MAX_SAMPLE && !ranked.has_ties {
        let p_value = exact_upper_tail(n_a, n_b, u_statistic.round() as usize);
        return Some(MannWhitneyResult {
            u_statistic,
            p_value: p_value.clamp(0.0, 1.0),
            method: TestMethod::Exact,
        });
    }

    let n = (n_a + n_b) as f64;
    let mu = (n_a * n_b) as f64 / 2.0;
    let variance =
        (n_a * n_b) as f64 / 12.0 * ((n + 1.0) - ranked.tie_term / (n * (n - 1.0)));

    let p_value = if variance <= 0.0 {
        // Every observation is tied: no evidence in either direction
        1.0
    } else {
        let z = (u_statistic - mu - 0.5) / variance.sqrt();
        1.0 - normal_cdf(z)
    };

    Some(MannWhitneyResult {
        u_statistic,
        p_value: p_value.clamp(0.0, 1.0),
        method: TestMethod::Asymptotic,
    })
}

struct Ranked {
    rank_sum_a: f64,
    /// Σ (t³ - t) over tie groups
    tie_term: f64,
    has_ties: bool,
}

/// Rank the pooled samples (1-based, midranks for ties)
fn rank_samples(a: &[f64], b: &[f64]) -> Ranked {
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&v| (v, true))
        .chain(b.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut rank_sum_a = 0.0;
    let mut tie_term = 0.0;
    let mut has_ties = false;

    let mut i = 0;
    while i < pooled.len() {
        let mut j = i + 1;
        while j < pooled.len() && pooled[j].0 == pooled[i].0 {
            j += 1;
        }
        // positions i..j share the average of ranks i+1..=j
        let midrank = (i + 1 + j) as f64 / 2.0;
        let t = (j - i) as f64;
        if j - i > 1 {
            has_ties = true;
            tie_term += t * t * t - t;
        }
        rank_sum_a += pooled[i..j].iter().filter(|(_, in_a)| *in_a).count() as f64 * midrank;
        i = j;
    }

    Ranked {
        rank_sum_a,
        tie_term,
        has_ties,
    }
}

/// Null distribution of U for group sizes (m, n): `counts[u]` is the number
/// of orderings with U = u.
///
/// Recurrence on the largest pooled observation: if it belongs to the first
/// group it beats all `n` values of the second one.
/// `c(m, n, u) = c(m - 1, n, u - n) + c(m, n - 1, u)`
pub(crate) fn u_distribution(m: usize, n: usize) -> Vec<u64> {
    // table[i][j] = distribution for sizes (i, j)
    let mut table: Vec<Vec<Vec<u64>>> = vec![vec![Vec::new(); n + 1]; m + 1];
    for i in 0..=m {
        for j in 0..=n {
            if i == 0 || j == 0 {
                table[i][j] = vec![1];
                continue;
            }
            let mut counts = vec![0u64; i * j + 1];
            for (u, &c) in table[i - 1][j].iter().enumerate() {
                counts[u + j] += c;
            }
            for (u, &c) in table[i][j - 1].iter().enumerate() {
                counts[u] += c;
            }
            table[i][j] = counts;
        }
    }
    std::mem::take(&mut table[m][n])
}

fn exact_upper_tail(m: usize, n: usize, u: usize) -> f64 {
    let counts = u_distribution(m, n);
    let total: u64 = counts.iter().sum();
    let tail: u64 = counts.iter().skip(u).sum();
    tail as f64 / total as f64
}

/// Approximate CDF of the standard normal distribution
pub(crate) fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Approximation of the error function (Abramowitz & Stegun 7.1.26)
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let coeff_p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + coeff_p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data() {
        assert!(mann_whitney_greater(&[1.0], &[1.0, 2.0]).is_none());
        assert!(mann_whitney_greater(&[1.0, 2.0], &[]).is_none());
        assert!(mann_whitney_greater(&[], &[]).is_none());
    }

    #[test]
    fn test_exact_extreme_greater() {
        let result = mann_whitney_greater(&[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(result.method, TestMethod::Exact);
        assert_eq!(result.u_statistic, 9.0);
        // only 1 of C(6,3) = 20 orderings reaches U = 9
        assert!((result.p_value - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_exact_extreme_less() {
        let result = mann_whitney_greater(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(result.u_statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_u_distribution_shape() {
        let counts = u_distribution(3, 3);
        assert_eq!(counts.len(), 10);
        assert_eq!(counts.iter().sum::<u64>(), 20);
        // symmetric around m*n/2
        for u in 0..counts.len() {
            assert_eq!(counts[u], counts[counts.len() - 1 - u]);
        }
        assert_eq!(u_distribution(8, 8).iter().sum::<u64>(), 12_870);
    }

    #[test]
    fn test_identical_multisets_not_significant() {
        let values = [1.2, 1.5, 1.5, 1.9, 2.4];
        let result = mann_whitney_greater(&values, &values).unwrap();
        assert_eq!(result.method, TestMethod::Asymptotic);
        assert!(result.p_value >= 0.5, "p = {}", result.p_value);
        assert!(result.p_value <= 1.0);
    }

    #[test]
    fn test_all_tied_returns_one() {
        let result = mann_whitney_greater(&[2.0, 2.0], &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_asymptotic_clear_shift() {
        let a: Vec<f64> = (0..30).map(|i| 10.0 + i as f64 * 0.1).collect();
        let b: Vec<f64> = (0..30).map(|i| i as f64 * 0.1).collect();
        let greater = mann_whitney_greater(&a, &b).unwrap();
        assert_eq!(greater.method, TestMethod::Asymptotic);
        assert!(greater.p_value < 1e-6, "p = {}", greater.p_value);

        let less = mann_whitney_greater(&b, &a).unwrap();
        assert!(less.p_value > 0.999, "p = {}", less.p_value);
    }

    #[test]
    fn test_midranks_with_ties() {
        // pooled: 1(a) 2(a) 2(b) 3(b) -> ranks 1, 2.5, 2.5, 4
        let ranked = rank_samples(&[1.0, 2.0], &[2.0, 3.0]);
        assert!((ranked.rank_sum_a - 3.5).abs() < 1e-12);
        assert!(ranked.has_ties);
        assert!((ranked.tie_term - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_p_value_in_unit_interval() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[1.0, 2.0], &[3.0, 4.0]),
            (&[5.0, 1.0, 3.0], &[2.0, 4.0]),
            (&[1.0, 1.0, 1.0], &[1.0, 2.0]),
            (&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9], &[0.15, 0.25]),
        ];
        for (a, b) in cases {
            let p = mann_whitney_greater(a, b).unwrap().p_value;
            assert!((0.0..=1.0).contains(&p), "p = {}", p);
        }
    }

    #[test]
    fn test_normal_cdf_known_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
        assert!(normal_cdf(4.0) > 0.99);
        assert!(normal_cdf(-4.0) < 0.01);
        assert!((normal_cdf(1.959964) - 0.975).abs() < 1e-4);
    }
}
