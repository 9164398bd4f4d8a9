//! Per-sample lexical metrics
//!
//! All metrics are ratios over the token count and degrade to `0.0` for an
//! empty token sequence.
//!
//! | Metric | Formula |
//! |--------|---------|
//! | WL     | Σ len(token) / n |
//! | LD     | distinct / n |
//! | FR     | rare / n (policy-dependent) |
//! | Syllables | Σ vowel_runs(token) / n |

use crate::models::MetricVector;
use rustc_hash::{FxHashMap, FxHashSet};

/// Vowels recognised by the syllable heuristic (plain and accented)
pub const DEFAULT_VOWELS: &str = "aeiouáàâãäåéèêëíìîïóòôõöúùûü";

/// Rare-word length threshold used when none is configured
pub const DEFAULT_RARE_THRESHOLD: usize = 5;

/// Definition of a "rare" word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RareWordPolicy {
    /// A token is rare when its length is at least `min_length` characters
    Threshold { min_length: usize },
    /// A token is rare when it occurs exactly once in the sample (hapax)
    Singleton,
}

impl Default for RareWordPolicy {
    fn default() -> Self {
        RareWordPolicy::Threshold {
            min_length: DEFAULT_RARE_THRESHOLD,
        }
    }
}

impl std::fmt::Display for RareWordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RareWordPolicy::Threshold { min_length } => write!(f, "threshold(>={})", min_length),
            RareWordPolicy::Singleton => write!(f, "singleton"),
        }
    }
}

/// Computes a [`MetricVector`] from a token sequence.
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    rare_words: RareWordPolicy,
    vowels: FxHashSet<char>,
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new(RareWordPolicy::default(), DEFAULT_VOWELS)
    }
}

impl MetricExtractor {
    pub fn new(rare_words: RareWordPolicy, vowels: &str) -> Self {
        Self {
            rare_words,
            vowels: vowels.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    pub fn rare_word_policy(&self) -> RareWordPolicy {
        self.rare_words
    }

    pub fn extract<S: AsRef<str>>(&self, tokens: &[S]) -> MetricVector {
        MetricVector {
            wl: average_word_length(tokens),
            ld: lexical_diversity(tokens),
            fr: rare_word_frequency(tokens, self.rare_words),
            syllable_complexity: self.syllable_complexity(tokens),
        }
    }

    /// Average number of vowel runs per token
    pub fn syllable_complexity<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let total: usize = tokens
            .iter()
            .map(|t| count_syllables(t.as_ref(), &self.vowels))
            .sum();
        total as f64 / tokens.len() as f64
    }
}

/// WL: mean token length in characters
pub fn average_word_length<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let total_chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
    total_chars as f64 / tokens.len() as f64
}

/// LD: type-token ratio
pub fn lexical_diversity<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: FxHashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    distinct.len() as f64 / tokens.len() as f64
}

/// FR: fraction of rare tokens under `policy`
pub fn rare_word_frequency<S: AsRef<str>>(tokens: &[S], policy: RareWordPolicy) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let rare = match policy {
        RareWordPolicy::Threshold { min_length } => tokens
            .iter()
            .filter(|t| t.as_ref().chars().count() >= min_length)
            .count(),
        RareWordPolicy::Singleton => {
            let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
            for token in tokens {
                *counts.entry(token.as_ref()).or_insert(0) += 1;
            }
            counts.values().filter(|&&c| c == 1).count()
        }
    };
    rare as f64 / tokens.len() as f64
}

/// Number of maximal vowel runs in `token`; a token without vowels has none.
pub fn count_syllables(token: &str, vowels: &FxHashSet<char>) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in token.chars().flat_map(char::to_lowercase) {
        let is_vowel = vowels.contains(&c);
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn vowels() -> FxHashSet<char> {
        DEFAULT_VOWELS.chars().collect()
    }

    #[test]
    fn test_empty_tokens_all_zero() {
        let empty: [&str; 0] = [];
        let metrics = MetricExtractor::default().extract(&empty);
        assert!(metrics.is_zero());

        let singleton = MetricExtractor::new(RareWordPolicy::Singleton, DEFAULT_VOWELS);
        assert!(singleton.extract(&empty).is_zero());
    }

    #[test]
    fn test_casa_livro_threshold() {
        let tokens = ["casa", "casa", "livro"];
        let metrics = MetricExtractor::default().extract(&tokens);
        assert!((metrics.wl - 13.0 / 3.0).abs() < EPS);
        assert!((metrics.ld - 2.0 / 3.0).abs() < EPS);
        assert!((metrics.fr - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_casa_livro_singleton() {
        let tokens = ["casa", "casa", "livro"];
        let fr = rare_word_frequency(&tokens, RareWordPolicy::Singleton);
        assert!((fr - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_singleton_all_distinct_is_one() {
        let tokens = ["um", "dois", "tres"];
        assert!((rare_word_frequency(&tokens, RareWordPolicy::Singleton) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_lexical_diversity_bounds() {
        let distinct = ["alfa", "beta", "gama", "delta"];
        assert!((lexical_diversity(&distinct) - 1.0).abs() < EPS);

        let same = ["casa"; 5];
        assert!((lexical_diversity(&same) - 0.2).abs() < EPS);
    }

    #[test]
    fn test_threshold_counts_characters() {
        // "ações" has 5 characters (7 bytes)
        let tokens = ["ações", "mar"];
        let fr = rare_word_frequency(&tokens, RareWordPolicy::Threshold { min_length: 5 });
        assert!((fr - 0.5).abs() < EPS);
        assert!((average_word_length(&tokens) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_count_syllables() {
        let v = vowels();
        assert_eq!(count_syllables("casa", &v), 2);
        assert_eq!(count_syllables("educação", &v), 4); // e-du-ca-ção -> e, u, a, ão
        assert_eq!(count_syllables("queijo", &v), 2); // uei, o
        assert_eq!(count_syllables("pfft", &v), 0);
        assert_eq!(count_syllables("", &v), 0);
    }

    #[test]
    fn test_syllable_complexity_average() {
        let extractor = MetricExtractor::default();
        let tokens = ["casa", "pfft"];
        assert!((extractor.syllable_complexity(&tokens) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_metric_ranges() {
        let extractor = MetricExtractor::new(RareWordPolicy::Singleton, DEFAULT_VOWELS);
        let samples: [&[&str]; 4] = [
            &["casa"],
            &["casa", "casa"],
            &["a", "bb", "ccc", "bb"],
            &["independentemente", "mar", "mar", "sol"],
        ];
        for tokens in samples {
            let m = extractor.extract(tokens);
            assert!(m.wl >= 0.0);
            assert!((0.0..=1.0).contains(&m.ld));
            assert!((0.0..=1.0).contains(&m.fr));
            assert!(m.syllable_complexity >= 0.0);
        }
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(RareWordPolicy::default().to_string(), "threshold(>=5)");
        assert_eq!(RareWordPolicy::Singleton.to_string(), "singleton");
    }
}
