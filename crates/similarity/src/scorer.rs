//! Scoring infrastructure
//!
//! This module provides:
//! - Scorer trait for pluggable similarity algorithms
//! - TfIdfCosineScorer default implementation
//! - `compute`, the one-call entry point
//!
//! Scoring is a pure function of its inputs. Scorers hold configuration only
//! and build fresh vectors on every call.

use crate::tokenizer::{tokenize_with, DEFAULT_MIN_TOKEN_LEN};
use crate::vectorizer::PairwiseTfIdf;
use essayscore_core::{Result, ScoreRange, ScoringConfig};

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Implementors supply [`similarity`](Scorer::similarity) in `[0, 1]`; the
/// provided [`score`](Scorer::score) applies the empty-text policy and the
/// projection onto a [`ScoreRange`].
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so one instance can grade concurrently.
pub trait Scorer: Send + Sync {
    /// Similarity between a candidate and a reference, in `[0, 1]`
    ///
    /// Must be symmetric in its arguments.
    fn similarity(&self, candidate: &str, reference: &str) -> f64;

    /// Score a candidate against a reference on `range`
    ///
    /// Either text being empty yields exactly `range.min()`.
    fn score(&self, candidate: &str, reference: &str, range: ScoreRange) -> f64 {
        if candidate.is_empty() || reference.is_empty() {
            return range.min();
        }
        range.project(self.similarity(candidate, reference))
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// TfIdfCosineScorer
// ============================================================================

/// Cosine similarity of pairwise TF-IDF vectors
///
/// The IDF corpus is the two documents under comparison, so the score of a
/// pair never depends on other calls.
#[derive(Debug, Clone)]
pub struct TfIdfCosineScorer {
    /// Shortest token kept, in chars (default 2)
    min_token_len: usize,
}

impl Default for TfIdfCosineScorer {
    fn default() -> Self {
        TfIdfCosineScorer {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

impl TfIdfCosineScorer {
    /// Create a scorer with default tokenization
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer from configuration
    pub fn from_config(config: &ScoringConfig) -> Self {
        TfIdfCosineScorer {
            min_token_len: config.min_token_len.max(1),
        }
    }

    /// Builder: set the shortest token kept
    ///
    /// Values below 1 are treated as 1.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len.max(1);
        self
    }

    /// Shortest token kept, in chars
    pub fn min_token_len(&self) -> usize {
        self.min_token_len
    }
}

impl Scorer for TfIdfCosineScorer {
    fn similarity(&self, candidate: &str, reference: &str) -> f64 {
        let reference_tokens = tokenize_with(reference, self.min_token_len);
        let candidate_tokens = tokenize_with(candidate, self.min_token_len);
        let pair = PairwiseTfIdf::fit(&reference_tokens, &candidate_tokens);
        let similarity = pair.cosine();

        tracing::trace!(
            target: "essayscore::similarity",
            reference_tokens = reference_tokens.len(),
            candidate_tokens = candidate_tokens.len(),
            vocabulary = pair.vocabulary().len(),
            similarity,
            "Pairwise TF-IDF similarity computed"
        );

        similarity
    }

    fn name(&self) -> &str {
        "tfidf-cosine"
    }
}

// ============================================================================
// compute
// ============================================================================

/// Score `candidate` against `reference` on `[min_score, max_score]`
///
/// Uses [`TfIdfCosineScorer`] with default tokenization. The result is
/// rounded to 2 decimal digits and lies within the range.
///
/// # Errors
///
/// Returns `Error::InvalidRange` when `min_score > max_score` or either
/// bound is not finite. No other input fails.
///
/// # Example
///
/// ```
/// use essayscore_similarity::compute;
///
/// assert_eq!(compute("", "anything", 10.0, 90.0).unwrap(), 10.0);
/// assert_eq!(compute("same words", "same words", 0.0, 100.0).unwrap(), 100.0);
/// assert!(compute("a", "b", 90.0, 10.0).is_err());
/// ```
pub fn compute(candidate: &str, reference: &str, min_score: f64, max_score: f64) -> Result<f64> {
    let range = ScoreRange::new(min_score, max_score)?;
    Ok(TfIdfCosineScorer::default().score(candidate, reference, range))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use essayscore_core::Error;

    const REFERENCE: &str =
        "Water is essential for all known forms of life. It covers 71% of Earth's surface.";

    #[test]
    fn test_identical_texts_score_max() {
        assert_eq!(compute(REFERENCE, REFERENCE, 0.0, 100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_empty_candidate_scores_min() {
        assert_eq!(compute("", "anything", 10.0, 90.0).unwrap(), 10.0);
    }

    #[test]
    fn test_empty_reference_scores_min() {
        assert_eq!(compute("anything", "", 10.0, 90.0).unwrap(), 10.0);
    }

    #[test]
    fn test_no_shared_vocabulary_scores_min() {
        assert_eq!(compute("apple banana", "xyz qrs", 0.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_only_short_tokens_scores_min() {
        // every token is one char, so both vectors are zero
        assert_eq!(compute("a b c", "a b c", 5.0, 10.0).unwrap(), 5.0);
    }

    #[test]
    fn test_known_partial_overlap() {
        assert_eq!(compute("the cat sat", "the dog sat", 0.0, 100.0).unwrap(), 50.31);
        assert_eq!(compute("the cat sat", "the dog sat", 0.0, 200.0).unwrap(), 100.62);
        assert_eq!(compute("the cat sat", "the dog sat", 10.0, 90.0).unwrap(), 50.25);
    }

    #[test]
    fn test_term_frequency_matters() {
        assert_eq!(
            compute("apple apple banana", "apple", 0.0, 100.0).unwrap(),
            81.82
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            compute("WATER IS LIFE", "water is life", 0.0, 100.0).unwrap(),
            100.0
        );
    }

    #[test]
    fn test_water_scenario() {
        let good = compute(
            "Water is crucial for life and covers most of the Earth.",
            REFERENCE,
            0.0,
            100.0,
        )
        .unwrap();
        let bad = compute("Computers are made of silicon.", REFERENCE, 0.0, 100.0).unwrap();

        assert_eq!(good, 42.46);
        // "of" is the only shared term
        assert_eq!(bad, 12.3);
        assert!(good > bad);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = compute("a", "b", 90.0, 10.0).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn test_inverted_range_rejected_even_for_empty_text() {
        assert!(compute("", "", 90.0, 10.0).is_err());
    }

    #[test]
    fn test_nan_bound_rejected() {
        assert!(compute("a", "b", f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_zero_width_range() {
        assert_eq!(compute(REFERENCE, REFERENCE, 7.0, 7.0).unwrap(), 7.0);
    }

    #[test]
    fn test_no_overlap_on_huge_range_is_min() {
        assert_eq!(
            compute("apple banana", "xyz qrs", 1e307, 1.5e307).unwrap(),
            1e307
        );
        assert_eq!(
            compute("apple banana", "xyz qrs", -f64::MAX, f64::MAX).unwrap(),
            -f64::MAX
        );
    }

    #[test]
    fn test_full_f64_range_stays_finite() {
        let score = compute("the cat sat", "the dog sat", -f64::MAX, f64::MAX).unwrap();
        assert!(score.is_finite());
    }

    #[test]
    fn test_identical_on_tie_bound_rounds_half_to_even() {
        assert_eq!(compute("same words", "same words", 0.0, 0.125).unwrap(), 0.12);
    }

    #[test]
    fn test_symmetric() {
        let a = "Water is crucial for life and covers most of the Earth.";
        let scorer = TfIdfCosineScorer::default();
        assert_eq!(scorer.similarity(a, REFERENCE), scorer.similarity(REFERENCE, a));
    }

    #[test]
    fn test_min_token_len_changes_vocabulary() {
        let strict = TfIdfCosineScorer::new().with_min_token_len(4);
        // every token is three chars long, so both vectors are empty
        assert_eq!(strict.similarity("the cat sat", "the dog sat"), 0.0);

        let loose = TfIdfCosineScorer::new().with_min_token_len(1);
        assert!(loose.similarity("a cat", "a dog") > 0.0);
    }

    #[test]
    fn test_from_config() {
        let config = ScoringConfig {
            min_token_len: 3,
            ..ScoringConfig::default()
        };
        assert_eq!(TfIdfCosineScorer::from_config(&config).min_token_len(), 3);
    }

    #[test]
    fn test_min_token_len_floor() {
        assert_eq!(TfIdfCosineScorer::new().with_min_token_len(0).min_token_len(), 1);
    }

    #[test]
    fn test_name() {
        assert_eq!(TfIdfCosineScorer::default().name(), "tfidf-cosine");
    }

    #[test]
    fn test_scorer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TfIdfCosineScorer>();
    }

    #[test]
    fn test_custom_scorer_uses_default_policy() {
        struct Half;
        impl Scorer for Half {
            fn similarity(&self, _: &str, _: &str) -> f64 {
                0.5
            }
            fn name(&self) -> &str {
                "half"
            }
        }

        let range = ScoreRange::new(0.0, 10.0).unwrap();
        assert_eq!(Half.score("x", "y", range), 5.0);
        assert_eq!(Half.score("", "y", range), 0.0);
    }
}
