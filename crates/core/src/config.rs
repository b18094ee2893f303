//! Scoring configuration via `essayscore.toml`
//!
//! Every key is optional; an empty file yields [`ScoringConfig::default`].

use crate::error::{Error, Result};
use crate::range::ScoreRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "essayscore.toml";

fn default_min_token_len() -> usize {
    2
}

fn default_max_score() -> f64 {
    100.0
}

/// Scoring configuration loaded from `essayscore.toml`.
///
/// # Example
///
/// ```toml
/// min_token_len = 2
/// default_min_score = 0.0
/// default_max_score = 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Shortest token kept by the tokenizer, in chars.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
    /// Lower bound used when the caller gives no range.
    #[serde(default)]
    pub default_min_score: f64,
    /// Upper bound used when the caller gives no range.
    #[serde(default = "default_max_score")]
    pub default_max_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_token_len: default_min_token_len(),
            default_min_score: 0.0,
            default_max_score: default_max_score(),
        }
    }
}

impl ScoringConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# essayscore configuration
#
# Shortest token kept by the tokenizer, counted in characters (default: 2).
# Single-character words such as "a" or "I" are dropped at 2.
min_token_len = 2

# Score range used by `essayscore score` when --min/--max are not given.
default_min_score = 0.0
default_max_score = 100.0
"#
    }

    /// Parse config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScoringConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(Error::config("min_token_len must be at least 1"));
        }
        self.default_range().map_err(|e| {
            Error::config(format!("invalid default score range: {}", e))
        })?;
        Ok(())
    }

    /// The configured default score range.
    pub fn default_range(&self) -> Result<ScoreRange> {
        ScoreRange::new(self.default_min_score, self.default_max_score)
    }
}
