//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Every subcommand is wired into `build_cli`
//! 2. Positional shifting: -f shifts the first positional to the inputs
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{
    ast_command, check_command, dump_command, exec_command, trace_command,
};

#[test]
fn build_cli_has_all_subcommands() {
    let cli = build_cli();
    let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, vec!["ast", "check", "dump", "exec", "trace"]);
}

#[test]
fn build_cli_dispatches_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["thompson", "check", "a|b"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "check");

    let params = CheckParams::from_matches(sub);
    assert_eq!(params.pattern.as_deref(), Some("a|b"));
    assert_eq!(params.pattern_file, None);
}

#[test]
fn build_cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["thompson"]).is_err());
}

#[test]
fn ast_params() {
    let m = ast_command()
        .try_get_matches_from(["ast", "(a|b)*", "--tokens", "--color", "never"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("(a|b)*"));
    assert!(params.tokens);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn color_defaults_to_auto() {
    let m = check_command().try_get_matches_from(["check", "a"]).unwrap();
    assert_eq!(CheckParams::from_matches(&m).color, ColorChoice::Auto);
}

#[test]
fn color_rejects_unknown_value() {
    let result = check_command().try_get_matches_from(["check", "a", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn dump_json_flag() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a*", "--json", "--color", "always"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Always);
    assert!(ColorChoice::Always.should_colorize());
}

#[test]
fn dump_from_file() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-f", "pattern.re"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.pattern_file, Some(PathBuf::from("pattern.re")));
    assert!(!params.json);
}

#[test]
fn exec_pattern_and_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "(a|b)*c", "abc", "ab", "--check"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("(a|b)*c"));
    assert_eq!(params.inputs, vec!["abc", "ab"]);
    assert!(params.check);
    assert!(!params.json);
}

#[test]
fn exec_without_inputs() {
    let m = exec_command().try_get_matches_from(["exec", "a"]).unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("a"));
    assert!(params.inputs.is_empty());
}

#[test]
fn exec_file_shifts_positionals_to_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-f", "pattern.re", "abc", "ab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.pattern_file, Some(PathBuf::from("pattern.re")));
    assert_eq!(params.inputs, vec!["abc", "ab"]);
}

#[test]
fn trace_pattern_and_input() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a+", "aaa"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("a+"));
    assert_eq!(params.input, "aaa");
}

#[test]
fn trace_file_shifts_positional_to_input() {
    let m = trace_command()
        .try_get_matches_from(["trace", "--file", "p.re", "aaa"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.input, "aaa");
}

#[test]
fn trace_missing_input_is_empty() {
    let m = trace_command().try_get_matches_from(["trace", "a?"]).unwrap();
    assert_eq!(TraceParams::from_matches(&m).input, "");
}

#[test]
fn help_lists_examples() {
    let help = exec_command().render_long_help().to_string();
    assert!(help.contains("EXAMPLES:"));
    assert!(help.contains("--check"));
    assert!(help.contains("--file"));
}
