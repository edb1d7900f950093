//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .help("Regular expression pattern")
}

/// Pattern from file (-f/--file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the pattern from a file (use \"-\" for stdin)")
}

/// Input strings to match (positional, any number).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .help("Input strings (read lines from stdin if none are given)")
}

/// Single input string for trace (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .help("Input string to trace")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of text")
}

/// Exit with failure if any input is rejected (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Exit with status 1 if any input is rejected")
}

/// Show tokens instead of the tree (--tokens).
pub fn tokens_arg() -> Arg {
    Arg::new("tokens")
        .long("tokens")
        .action(ArgAction::SetTrue)
        .help("Show lexer tokens with their spans")
}
