//! Word token extraction
//!
//! Lower-cases the text and splits it on every character that is not in the
//! configured alphabet. Digits, punctuation and symbols are all separators.

use rustc_hash::FxHashSet;

/// ASCII letters plus the Latin-1 lower-case letters (`ß`, `à`..=`ÿ` without `÷`)
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ";

/// Minimum token length used when none is configured
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Extracts normalized word tokens from raw text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_length: usize,
    alphabet: FxHashSet<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH, DEFAULT_ALPHABET)
    }
}

impl Tokenizer {
    /// Build a tokenizer. Alphabet letters are lower-cased so that
    /// `"ÁÉ"` and `"áé"` describe the same set.
    pub fn new(min_token_length: usize, alphabet: &str) -> Self {
        let alphabet = alphabet
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| !c.is_whitespace())
            .collect();
        Self {
            min_token_length,
            alphabet,
        }
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    /// Tokenize text, preserving order of appearance (no deduplication).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for c in text.chars().flat_map(char::to_lowercase) {
            if self.is_letter(c) {
                current.push(c);
                current_len += 1;
            } else if !current.is_empty() {
                self.flush(&mut current, current_len, &mut tokens);
                current_len = 0;
            }
        }
        if !current.is_empty() {
            self.flush(&mut current, current_len, &mut tokens);
        }

        tokens
    }

    fn flush(&self, current: &mut String, len: usize, tokens: &mut Vec<String>) {
        if len >= self.min_token_length {
            tokens.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }
}
