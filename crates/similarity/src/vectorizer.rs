//! Pairwise TF-IDF vectorization
//!
//! The IDF corpus is exactly the two documents being compared. A
//! [`PairwiseTfIdf`] is built and dropped inside a single scoring call; there
//! is no vocabulary shared between calls.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1      n = 2
//! w(t, d)   = tf(t, d) * idf(t)
//! ```
//!
//! With two documents a shared term gets `idf = 1.0` and a term unique to
//! one side gets `idf = 1 + ln(1.5)`.

use std::collections::{BTreeMap, BTreeSet};

/// Number of documents in the IDF corpus
pub const CORPUS_SIZE: usize = 2;

/// Count occurrences of each token
///
/// Keys are ordered, which fixes the vocabulary order of the vectors.
pub fn term_counts(tokens: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed inverse document frequency
///
/// Smoothing acts as if one extra document contained every term, so
/// `doc_freq == n_docs` still yields a positive weight of `1.0`.
pub fn smoothed_idf(n_docs: usize, doc_freq: usize) -> f64 {
    ((1 + n_docs) as f64 / (1 + doc_freq) as f64).ln() + 1.0
}

/// Dot product of two aligned vectors
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm
pub fn vector_magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two aligned vectors
///
/// Returns `0.0` when either vector is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mag_a = vector_magnitude(a);
    let mag_b = vector_magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot_product(a, b) / (mag_a * mag_b)
}

/// TF-IDF vectors for a reference/candidate pair over their joint vocabulary
#[derive(Debug, Clone)]
pub struct PairwiseTfIdf {
    vocabulary: Vec<String>,
    reference: Vec<f64>,
    candidate: Vec<f64>,
}

impl PairwiseTfIdf {
    /// Weight both token streams over their joint vocabulary
    pub fn fit(reference_tokens: &[String], candidate_tokens: &[String]) -> Self {
        let reference_counts = term_counts(reference_tokens);
        let candidate_counts = term_counts(candidate_tokens);

        let vocabulary: BTreeSet<&str> = reference_counts
            .keys()
            .chain(candidate_counts.keys())
            .copied()
            .collect();

        let mut reference = Vec::with_capacity(vocabulary.len());
        let mut candidate = Vec::with_capacity(vocabulary.len());

        for term in &vocabulary {
            let ref_tf = reference_counts.get(term).copied().unwrap_or(0);
            let cand_tf = candidate_counts.get(term).copied().unwrap_or(0);
            let df = usize::from(ref_tf > 0) + usize::from(cand_tf > 0);
            let idf = smoothed_idf(CORPUS_SIZE, df);

            reference.push(ref_tf as f64 * idf);
            candidate.push(cand_tf as f64 * idf);
        }

        PairwiseTfIdf {
            vocabulary: vocabulary.into_iter().map(String::from).collect(),
            reference,
            candidate,
        }
    }

    /// Joint vocabulary in sorted order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Reference weights, aligned with [`vocabulary`](Self::vocabulary)
    pub fn reference_weights(&self) -> &[f64] {
        &self.reference
    }

    /// Candidate weights, aligned with [`vocabulary`](Self::vocabulary)
    pub fn candidate_weights(&self) -> &[f64] {
        &self.candidate
    }

    /// Cosine similarity of the two vectors, clamped to `[0, 1]`
    pub fn cosine(&self) -> f64 {
        cosine_similarity(&self.reference, &self.candidate).clamp(0.0, 1.0)
    }
}
