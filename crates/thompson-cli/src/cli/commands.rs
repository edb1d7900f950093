//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every command takes the pattern either positionally or via `-f`.

use clap::Command;

use super::args::*;

/// Pattern input and color flag shared by every command.
///
/// Added before any other positional so `PATTERN` is always the first one.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Compile regular expressions to NFAs and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Show the parsed syntax tree.
pub fn ast_command() -> Command {
    with_pattern_args(Command::new("ast"))
        .about("Show the syntax tree of a pattern")
        .override_usage(
            "\
  thompson ast <PATTERN>
  thompson ast -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson ast '(a|b)*c'          # syntax tree
  thompson ast '(a|b)*c' --tokens # lexer tokens
  thompson ast -f pattern.re      # pattern from file"#,
        )
        .arg(tokens_arg())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    with_pattern_args(Command::new("check"))
        .about("Validate a pattern")
        .override_usage(
            "\
  thompson check <PATTERN>
  thompson check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson check 'a(b|c)+'        # silent on success
  thompson check -f pattern.re    # pattern from file"#,
        )
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    with_pattern_args(Command::new("dump"))
        .about("Show the compiled automaton")
        .override_usage(
            "\
  thompson dump <PATTERN> [--json]
  thompson dump -f <FILE> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  thompson dump 'a*'              # state listing
  thompson dump 'a*' --json       # serialized automaton"#,
        )
        .arg(json_arg())
}

/// Match input strings against a pattern.
pub fn exec_command() -> Command {
    with_pattern_args(Command::new("exec"))
        .about("Match input strings against a pattern")
        .override_usage(
            "\
  thompson exec <PATTERN> [INPUT]...
  thompson exec -f <FILE> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  thompson exec '(a|b)*c' abc ab  # one verdict per input
  thompson exec -f p.re abc       # pattern from file
  thompson exec 'a+' --check aaa  # exit 1 on any rejection
  printf 'a\nb\n' | thompson exec 'a'"#,
        )
        .arg(inputs_arg())
        .arg(json_arg())
        .arg(check_arg())
}

/// Trace a simulation step by step.
pub fn trace_command() -> Command {
    with_pattern_args(Command::new("trace"))
        .about("Trace the simulation of a pattern over an input")
        .override_usage(
            "\
  thompson trace <PATTERN> <INPUT>
  thompson trace -f <FILE> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  thompson trace '(a|b)*c' abc    # active states after each character
  thompson trace -f p.re abc      # pattern from file"#,
        )
        .arg(input_arg())
}
