//! Core types for essayscore
//!
//! This crate defines the shared vocabulary of the workspace:
//! - Error: error type hierarchy
//! - ScoreRange: validated `[min, max]` interval and score rounding
//! - Question, Submission, Essay: records exchanged with the caller's store
//! - Limits: field length limits for those records
//! - ScoringConfig: `essayscore.toml` configuration
//!
//! It has no knowledge of how similarity is computed; see the
//! `essayscore-similarity` crate for that.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod range;
pub mod types;

pub use config::{ScoringConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use limits::{LimitError, Limits};
pub use range::{round_score, ScoreRange, SCORE_DECIMALS};
pub use types::{Essay, Question, Submission, MAX_EXACT_BOUND};
