//! essayscore - lexical similarity scoring for essay submissions
//!
//! Scores a candidate text against a reference answer and maps the result
//! onto a caller-chosen score range.
//!
//! # Quick Start
//!
//! ```
//! use essayscore::compute;
//!
//! let reference = "Water is essential for all known forms of life.";
//! assert_eq!(compute(reference, reference, 0.0, 100.0)?, 100.0);
//! assert_eq!(compute("", reference, 10.0, 90.0)?, 10.0);
//! # Ok::<(), essayscore::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `essayscore-core`: ranges, records, limits, configuration, errors
//! - `essayscore-similarity`: tokenizer, pairwise TF-IDF, scorers, grader
//!
//! This crate re-exports both.

pub use essayscore_core::*;
pub use essayscore_similarity::*;
