//! essayscore CLI: score essays against a reference answer.
//!
//! Two commands:
//! - **score**: `essayscore score -c TEXT -r TEXT [--min N] [--max N]`
//! - **grade**: `essayscore grade -q question.toml -s NAME -e TEXT`
//!
//! Texts can also come from files (`--candidate-file`, `--reference-file`,
//! `--essay-file`), with `-` meaning stdin.

mod commands;
mod format;
mod parse;

use std::path::Path;
use std::process;

use clap::ArgMatches;
use essayscore_core::{Result, ScoreRange, ScoringConfig, CONFIG_FILE_NAME};
use essayscore_similarity::{Grader, Scorer, TfIdfCosineScorer};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, CliOutput, OutputMode, ScoreReport};
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let exit_code = match run(&matches) {
        Ok(output) => {
            let formatted = format_output(&output, output_mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            1
        }
    };
    process::exit(exit_code);
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<ScoringConfig> {
    if let Some(path) = matches.get_one::<String>("config") {
        let config = ScoringConfig::from_file(Path::new(path))?;
        tracing::info!(target: "essayscore::cli", path = %path, "Loaded config");
        return Ok(config);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.is_file() {
        let config = ScoringConfig::from_file(default_path)?;
        tracing::info!(target: "essayscore::cli", path = CONFIG_FILE_NAME, "Loaded config");
        return Ok(config);
    }

    tracing::debug!(target: "essayscore::cli", "No config file, using defaults");
    Ok(ScoringConfig::default())
}

fn run(matches: &ArgMatches) -> Result<CliOutput> {
    let config = load_config(matches)?;

    match matches_to_action(matches)? {
        CliAction::Score {
            candidate,
            reference,
            min,
            max,
        } => {
            let range = ScoreRange::new(
                min.unwrap_or(config.default_min_score),
                max.unwrap_or(config.default_max_score),
            )?;
            let scorer = TfIdfCosineScorer::from_config(&config);
            let score = scorer.score(&candidate, &reference, range);

            tracing::info!(
                target: "essayscore::cli",
                scorer = scorer.name(),
                score,
                "Scored candidate"
            );

            Ok(CliOutput::Score(ScoreReport {
                score,
                min_score: range.min(),
                max_score: range.max(),
                scorer: scorer.name().to_string(),
            }))
        }
        CliAction::Grade {
            question,
            submission,
        } => {
            let grader = Grader::from_config(&config);
            let essay = grader.grade(&question, submission)?;
            Ok(CliOutput::Essay(essay))
        }
    }
}
