//! ArgMatches → CliAction conversion.
//!
//! Resolves text sources (inline, file, stdin) and question files so that
//! `main` only dispatches fully-loaded inputs.

use std::io::Read;
use std::path::Path;

use clap::ArgMatches;
use essayscore_core::{Error, Question, Result, Submission};

/// The result of parsing user input.
#[derive(Debug)]
pub enum CliAction {
    /// Score a candidate against a reference.
    Score {
        candidate: String,
        reference: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Grade a submission to a stored question.
    Grade {
        question: Question,
        submission: Submission,
    },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| Error::invalid_input("No command provided"))?;

    match sub_name {
        "score" => parse_score(sub_matches),
        "grade" => parse_grade(sub_matches),
        other => Err(Error::invalid_input(format!("Unknown command: {}", other))),
    }
}

fn parse_score(matches: &ArgMatches) -> Result<CliAction> {
    Ok(CliAction::Score {
        candidate: text_arg(matches, "candidate", "candidate-file")?,
        reference: text_arg(matches, "reference", "reference-file")?,
        min: matches.get_one::<f64>("min").copied(),
        max: matches.get_one::<f64>("max").copied(),
    })
}

fn parse_grade(matches: &ArgMatches) -> Result<CliAction> {
    let question_path = matches
        .get_one::<String>("question")
        .ok_or_else(|| Error::invalid_input("Missing --question"))?;
    let student = matches
        .get_one::<String>("student")
        .ok_or_else(|| Error::invalid_input("Missing --student"))?;

    Ok(CliAction::Grade {
        question: read_question(Path::new(question_path))?,
        submission: Submission::new(student.clone(), text_arg(matches, "essay", "essay-file")?),
    })
}

// =========================================================================
// Source reading helpers
// =========================================================================

/// Resolve a text given either inline (`inline_id`) or as a file (`file_id`).
fn text_arg(matches: &ArgMatches, inline_id: &str, file_id: &str) -> Result<String> {
    if let Some(text) = matches.get_one::<String>(inline_id) {
        return Ok(text.clone());
    }
    match matches.get_one::<String>(file_id) {
        Some(source) => read_text_from_source(source),
        None => Err(Error::invalid_input(format!(
            "Missing --{} or --{}",
            inline_id, file_id
        ))),
    }
}

/// Read text from a file or stdin.
///
/// If `source` is "-", reads from stdin. Content is kept verbatim; only a
/// file that is empty scores as empty.
pub fn read_text_from_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", source, e),
        ))
    })
}

/// Read a question from a `.toml` or `.json` file.
///
/// Files with any other extension are tried as TOML. `path` is always a
/// file; "-" does not mean stdin here, since stdin may already carry the essay.
pub fn read_question(path: &Path) -> Result<Question> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        toml::from_str(&content).map_err(|e| {
            Error::SerializationError(format!(
                "Invalid question file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
