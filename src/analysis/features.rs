//! Linguistic feature extraction from raw message text.
//!
//! Produces two scalar scores per message:
//!
//! - `complexity`: word count and mean word length, normalized against a
//!   20-word / 10-char baseline. Unbounded above; a long, elaborate
//!   message scores well past 1.0 and callers must tolerate that.
//! - `linguistic_intensity`: weighted punctuation counts (`!`, `?`, and
//!   `...`). Also unbounded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Word tokens, Unicode-aware (accented words count as single tokens).
static WORD_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word token pattern"));

const WORD_COUNT_NORM: f64 = 20.0;
const WORD_LEN_NORM: f64 = 10.0;
const EXCLAMATION_WEIGHT: f64 = 0.3;
const QUESTION_WEIGHT: f64 = 0.2;
const ELLIPSIS_WEIGHT: f64 = 0.1;

/// Scalar linguistic features of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextFeatures {
    /// Number of word tokens.
    pub word_count: usize,
    /// Mean token length in chars, 0.0 for empty text.
    pub avg_word_len: f64,
    /// `word_count/20 + avg_word_len/10`, unbounded above.
    pub complexity: f64,
    /// Weighted punctuation score, unbounded above.
    pub linguistic_intensity: f64,
}

/// Extract [`TextFeatures`] from a message.
pub fn analyze_text(text: &str) -> TextFeatures {
    let mut word_count = 0usize;
    let mut total_len = 0usize;
    for token in WORD_TOKENS.find_iter(text) {
        word_count += 1;
        total_len += token.as_str().chars().count();
    }
    let avg_word_len = if word_count > 0 {
        total_len as f64 / word_count as f64
    } else {
        0.0
    };
    let complexity = word_count as f64 / WORD_COUNT_NORM + avg_word_len / WORD_LEN_NORM;

    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    let ellipses = text.matches("...").count();
    let linguistic_intensity = EXCLAMATION_WEIGHT * exclamations as f64
        + QUESTION_WEIGHT * questions as f64
        + ELLIPSIS_WEIGHT * ellipses as f64;

    TextFeatures {
        word_count,
        avg_word_len,
        complexity,
        linguistic_intensity,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zeroes() {
        let features = analyze_text("");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.avg_word_len, 0.0);
        assert_eq!(features.complexity, 0.0);
        assert_eq!(features.linguistic_intensity, 0.0);
    }

    #[test]
    fn test_punctuation_only_text() {
        let features = analyze_text("?!...");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.complexity, 0.0);
        let expected = 0.3 + 0.2 + 0.1;
        assert!((features.linguistic_intensity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_word_count_and_average_length() {
        let features = analyze_text("uma frase curta");
        assert_eq!(features.word_count, 3);
        // Token lengths 3, 5, 5.
        assert!((features.avg_word_len - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_accented_words_count_once() {
        let features = analyze_text("lógica é razão");
        assert_eq!(features.word_count, 3);
        // "lógica" is 6 chars, "é" is 1, "razão" is 5.
        assert!((features.avg_word_len - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_complexity_formula() {
        // 20 words of length 10 normalize to exactly 1.0 + 1.0.
        let text = vec!["abcdefghij"; 20].join(" ");
        let features = analyze_text(&text);
        assert_eq!(features.word_count, 20);
        assert!((features.complexity - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_weights() {
        let features = analyze_text("sério?? incrível!!! pois é...");
        let expected = 0.3 * 3.0 + 0.2 * 2.0 + 0.1;
        assert!((features.linguistic_intensity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ellipsis_counts_are_non_overlapping() {
        // Six dots form two ellipses, four dots form one.
        assert!((analyze_text("......").linguistic_intensity - 0.2).abs() < 1e-12);
        assert!((analyze_text("....").linguistic_intensity - 0.1).abs() < 1e-12);
    }
}
