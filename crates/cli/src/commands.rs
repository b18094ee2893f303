//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("essayscore")
        .about("Score essays against a reference answer by lexical similarity")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an essayscore.toml (default: ./essayscore.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare score only)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(build_score())
        .subcommand(build_grade())
}

fn build_score() -> Command {
    Command::new("score")
        .about("Score a candidate text against a reference text")
        .arg(
            Arg::new("candidate")
                .long("candidate")
                .short('c')
                .help("Candidate text"),
        )
        .arg(
            Arg::new("candidate-file")
                .long("candidate-file")
                .help("Read the candidate from a file (\"-\" for stdin)"),
        )
        .group(
            ArgGroup::new("candidate-source")
                .args(["candidate", "candidate-file"])
                .required(true),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .short('r')
                .help("Reference text"),
        )
        .arg(
            Arg::new("reference-file")
                .long("reference-file")
                .help("Read the reference from a file (\"-\" for stdin)"),
        )
        .group(
            ArgGroup::new("reference-source")
                .args(["reference", "reference-file"])
                .required(true),
        )
        .arg(
            Arg::new("min")
                .long("min")
                .help("Lowest score (default from config, 0)")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .help("Highest score (default from config, 100)")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true),
        )
}

fn build_grade() -> Command {
    Command::new("grade")
        .about("Grade a student's essay against a stored question")
        .arg(
            Arg::new("question")
                .long("question")
                .short('q')
                .help("Question file (.toml or .json)")
                .required(true),
        )
        .arg(
            Arg::new("student")
                .long("student")
                .short('s')
                .help("Student name")
                .required(true),
        )
        .arg(Arg::new("essay").long("essay").short('e').help("Essay text"))
        .arg(
            Arg::new("essay-file")
                .long("essay-file")
                .help("Read the essay from a file (\"-\" for stdin)"),
        )
        .group(
            ArgGroup::new("essay-source")
                .args(["essay", "essay-file"])
                .required(true),
        )
}
