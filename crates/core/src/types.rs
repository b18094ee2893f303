//! Question, submission and essay records
//!
//! These are the values exchanged with the persistence and presentation
//! layers. They carry no identity: the caller's store assigns ids.

use crate::error::{Error, Result};
use crate::limits::{LimitError, Limits};
use crate::range::ScoreRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest magnitude an integer bound can have and still convert to `f64` exactly
pub const MAX_EXACT_BOUND: i64 = 1 << 53;

fn default_min_score() -> i64 {
    0
}

fn default_max_score() -> i64 {
    100
}

/// A question with its model answer and score range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Short title (at most 200 chars)
    pub title: String,

    /// Prompt shown to the student
    pub prompt_text: String,

    /// The model answer submissions are compared against
    pub reference_answer: String,

    /// Lowest score a submission can receive (default: 0)
    #[serde(default = "default_min_score")]
    pub min_score: i64,

    /// Highest score a submission can receive (default: 100)
    #[serde(default = "default_max_score")]
    pub max_score: i64,

    /// Creation time
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Create a question with the default 0..100 range
    pub fn new(
        title: impl Into<String>,
        prompt_text: impl Into<String>,
        reference_answer: impl Into<String>,
    ) -> Self {
        Question {
            title: title.into(),
            prompt_text: prompt_text.into(),
            reference_answer: reference_answer.into(),
            min_score: default_min_score(),
            max_score: default_max_score(),
            created_at: Utc::now(),
        }
    }

    /// Builder: set the score range
    pub fn with_range(mut self, min_score: i64, max_score: i64) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    /// The question's score range
    ///
    /// Fails when `min_score > max_score`, or when a bound lies outside
    /// `±MAX_EXACT_BOUND` and would lose precision as `f64`.
    pub fn score_range(&self) -> Result<ScoreRange> {
        let (min, max) = (self.min_score as f64, self.max_score as f64);
        if self.min_score.unsigned_abs() > MAX_EXACT_BOUND as u64
            || self.max_score.unsigned_abs() > MAX_EXACT_BOUND as u64
        {
            return Err(Error::InvalidRange { min, max });
        }
        ScoreRange::new(min, max)
    }

    /// Check the title, reference answer and range
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        limits.validate_title(&self.title)?;
        if self.reference_answer.trim().is_empty() {
            return Err(LimitError::EmptyField {
                field: "reference_answer",
            }
            .into());
        }
        self.score_range()?;
        Ok(())
    }
}

/// An essay as submitted by a student, before grading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Student's display name (at most 100 chars)
    pub student_name: String,

    /// Essay body
    pub content: String,
}

impl Submission {
    /// Create a submission
    pub fn new(student_name: impl Into<String>, content: impl Into<String>) -> Self {
        Submission {
            student_name: student_name.into(),
            content: content.into(),
        }
    }

    /// Check the student name
    ///
    /// Empty content is allowed; it grades to the question's minimum.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        limits.validate_student_name(&self.student_name)?;
        Ok(())
    }
}

/// A graded submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    /// Title of the question this essay answers
    pub question_title: String,

    /// Student's display name
    pub student_name: String,

    /// Essay body
    pub content: String,

    /// Score on the question's range, once graded
    #[serde(default)]
    pub score: Option<f64>,

    /// Free-form reviewer feedback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    /// Submission time
    pub submitted_at: DateTime<Utc>,
}

impl Essay {
    /// Build an ungraded essay for `question` from `submission`
    pub fn from_submission(question: &Question, submission: Submission) -> Self {
        Essay {
            question_title: question.title.clone(),
            student_name: submission.student_name,
            content: submission.content,
            score: None,
            feedback: None,
            submitted_at: Utc::now(),
        }
    }

    /// Builder: set the score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Builder: set reviewer feedback
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}
