//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-f` shifts the first positional to the inputs)

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

pub struct AstParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub tokens: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            tokens: m.get_flag("tokens"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            tokens: p.tokens,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub json: bool,
    pub check: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let pattern = m.get_one::<String>("pattern").cloned();
        let inputs: Vec<String> = m
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // Positional shifting: with -f, every positional is an input.
        let (pattern, inputs) = shift_pattern_to_inputs(pattern_file.is_some(), pattern, inputs);

        Self {
            pattern,
            pattern_file,
            inputs,
            json: m.get_flag("json"),
            check: m.get_flag("check"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            inputs: p.inputs,
            json: p.json,
            check: p.check,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub input: String,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let pattern = m.get_one::<String>("pattern").cloned();
        let inputs: Vec<String> = m.get_one::<String>("input").cloned().into_iter().collect();

        let (pattern, inputs) = shift_pattern_to_inputs(pattern_file.is_some(), pattern, inputs);

        Self {
            pattern,
            pattern_file,
            // A missing input traces the empty string.
            input: inputs.into_iter().next().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// When -f is used, the `PATTERN` positional actually holds the first input.
/// This enables: `thompson exec -f pattern.re abc`
fn shift_pattern_to_inputs(
    has_pattern_file: bool,
    pattern: Option<String>,
    mut inputs: Vec<String>,
) -> (Option<String>, Vec<String>) {
    match pattern {
        Some(first) if has_pattern_file => {
            inputs.insert(0, first);
            (None, inputs)
        }
        pattern => (pattern, inputs),
    }
}
