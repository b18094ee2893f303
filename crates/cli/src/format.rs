//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): labelled lines, e.g. `(score) 42.46 of [0, 100]`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): the bare score

use essayscore_core::{Error, Essay};
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Result of a `score` command.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub scorer: String,
}

/// Anything a command can print.
#[derive(Debug)]
pub enum CliOutput {
    Score(ScoreReport),
    Essay(Essay),
}

/// Format a successful output.
pub fn format_output(output: &CliOutput, mode: OutputMode) -> String {
    match (output, mode) {
        (CliOutput::Score(report), OutputMode::Json) => to_json(report),
        (CliOutput::Essay(essay), OutputMode::Json) => to_json(essay),
        (CliOutput::Score(report), OutputMode::Raw) => format_score(report.score),
        (CliOutput::Essay(essay), OutputMode::Raw) => {
            essay.score.map(format_score).unwrap_or_default()
        }
        (CliOutput::Score(report), OutputMode::Human) => format!(
            "(score) {} of [{}, {}]",
            format_score(report.score),
            report.min_score,
            report.max_score
        ),
        (CliOutput::Essay(essay), OutputMode::Human) => format_essay_human(essay),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Scores always print with two decimals.
fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_essay_human(essay: &Essay) -> String {
    let score = essay
        .score
        .map(format_score)
        .unwrap_or_else(|| "(nil)".to_string());
    let mut lines = vec![
        format!("question:     {}", essay.question_title),
        format!("student:      {}", essay.student_name),
        format!("score:        {}", score),
        format!("submitted_at: {}", essay.submitted_at.to_rfc3339()),
    ];
    if let Some(feedback) = &essay.feedback {
        lines.push(format!("feedback:     {}", feedback));
    }
    lines.join("\n")
}
