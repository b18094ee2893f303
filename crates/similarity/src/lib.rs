//! Similarity scoring for essayscore
//!
//! This crate provides:
//! - Basic tokenizer
//! - Pairwise TF-IDF vectorizer and cosine similarity
//! - Scorer trait for pluggable similarity algorithms
//! - TfIdfCosineScorer default implementation
//! - `compute` entry point
//! - Grader for turning submissions into scored essays
//!
//! # Usage
//!
//! ```
//! use essayscore_similarity::compute;
//!
//! let reference = "Water is essential for all known forms of life.";
//! let score = compute("Water is crucial for life.", reference, 0.0, 100.0)?;
//! assert!(score > 0.0 && score < 100.0);
//! # Ok::<(), essayscore_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grader;
pub mod scorer;
pub mod tokenizer;
pub mod vectorizer;

// Re-export commonly used types
pub use grader::Grader;
pub use scorer::{compute, Scorer, TfIdfCosineScorer};
pub use tokenizer::{tokenize, tokenize_with, DEFAULT_MIN_TOKEN_LEN};
pub use vectorizer::{cosine_similarity, PairwiseTfIdf};
