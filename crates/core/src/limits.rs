//! Field limits for questions and submissions
//!
//! The persistence layer that stores questions and essays caps a few text
//! fields. These limits are enforced before grading so a record that could
//! not be stored is never scored.

use thiserror::Error;

/// Length limits for record fields, counted in `char`s
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum question title length (default: 200)
    pub max_title_chars: usize,

    /// Maximum student name length (default: 100)
    pub max_student_name_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_title_chars: 200,
            max_student_name_chars: 100,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_title_chars: 10,
            max_student_name_chars: 5,
        }
    }

    /// Validate a question title
    pub fn validate_title(&self, title: &str) -> Result<(), LimitError> {
        validate_text("title", title, self.max_title_chars)
    }

    /// Validate a student name
    pub fn validate_student_name(&self, name: &str) -> Result<(), LimitError> {
        validate_text("student_name", name, self.max_student_name_chars)
    }
}

fn validate_text(field: &'static str, value: &str, max: usize) -> Result<(), LimitError> {
    if value.trim().is_empty() {
        return Err(LimitError::EmptyField { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(LimitError::FieldTooLong { field, actual, max });
    }
    Ok(())
}

/// Limit validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// A required field is empty or whitespace only
    #[error("Field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field
        field: &'static str,
    },

    /// A field exceeds its maximum length
    #[error("Field '{field}' too long: {actual} chars exceeds maximum {max}")]
    FieldTooLong {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in chars
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl LimitError {
    /// Stable reason code for machine-readable output
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::EmptyField { .. } => "empty_field",
            LimitError::FieldTooLong { .. } => "field_too_long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_title_chars, 200);
        assert_eq!(limits.max_student_name_chars, 100);
    }

    #[test]
    fn test_title_at_max_length() {
        let limits = Limits::default();
        let title = "t".repeat(200);
        assert!(limits.validate_title(&title).is_ok());
    }

    #[test]
    fn test_title_exceeds_max_length() {
        let limits = Limits::default();
        let title = "t".repeat(201);
        assert_eq!(
            limits.validate_title(&title),
            Err(LimitError::FieldTooLong {
                field: "title",
                actual: 201,
                max: 200,
            })
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let limits = Limits::with_small_limits();
        // 5 chars, 10 bytes
        assert!(limits.validate_student_name("ééééé").is_ok());
        assert!(limits.validate_student_name("éééééé").is_err());
    }

    #[test]
    fn test_empty_student_name() {
        let limits = Limits::default();
        let err = limits.validate_student_name("   ").unwrap_err();
        assert_eq!(err, LimitError::EmptyField { field: "student_name" });
        assert_eq!(err.reason_code(), "empty_field");
    }

    #[test]
    fn test_reason_codes() {
        let err = LimitError::FieldTooLong {
            field: "title",
            actual: 3,
            max: 2,
        };
        assert_eq!(err.reason_code(), "field_too_long");
    }
}
