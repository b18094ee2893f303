//! Essay grading orchestrator
//!
//! Grader turns a [`Submission`] to a [`Question`] into a scored [`Essay`]:
//!
//! 1. Validate the question (title, reference answer, range)
//! 2. Validate the submission (student name)
//! 3. Score the content against the reference answer
//!
//! Grader is STATELESS. It holds a scorer and field limits; nothing learned
//! from one essay affects the next.

use crate::scorer::{Scorer, TfIdfCosineScorer};
use essayscore_core::{Essay, Limits, Question, Result, ScoringConfig, Submission};
use std::sync::Arc;

/// Essay grading orchestrator
#[derive(Clone)]
pub struct Grader {
    scorer: Arc<dyn Scorer>,
    limits: Limits,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new()
    }
}

impl Grader {
    /// Create a grader with [`TfIdfCosineScorer`] and default limits
    pub fn new() -> Self {
        Grader {
            scorer: Arc::new(TfIdfCosineScorer::default()),
            limits: Limits::default(),
        }
    }

    /// Create a grader whose scorer follows `config`
    pub fn from_config(config: &ScoringConfig) -> Self {
        Grader {
            scorer: Arc::new(TfIdfCosineScorer::from_config(config)),
            limits: Limits::default(),
        }
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: set custom field limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Name of the scorer in use
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Grade a submission against a question
    ///
    /// # Errors
    ///
    /// Fails if the question or the submission is invalid. Scoring itself
    /// cannot fail.
    pub fn grade(&self, question: &Question, submission: Submission) -> Result<Essay> {
        question.validate(&self.limits)?;
        submission.validate(&self.limits)?;

        let range = question.score_range()?;
        let score = self
            .scorer
            .score(&submission.content, &question.reference_answer, range);

        tracing::debug!(
            target: "essayscore::grader",
            question = %question.title,
            student = %submission.student_name,
            scorer = self.scorer.name(),
            score,
            "Essay graded"
        );

        Ok(Essay::from_submission(question, submission).with_score(score))
    }
}
