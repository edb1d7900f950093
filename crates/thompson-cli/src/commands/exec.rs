//! Match input strings against a pattern.

use std::io::{self, BufRead};
use std::path::PathBuf;

use serde::Serialize;
use thompson_lib::{Colors, Nfa};

use super::pattern_loader::{LoadError, pattern_reads_stdin};
use super::run_common;

pub struct ExecArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub json: bool,
    pub check: bool,
    pub color: bool,
}

/// Verdict for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub input: String,
    pub accepted: bool,
}

pub fn run(args: ExecArgs) {
    if let Err(e) = check_input_source(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let pattern =
        run_common::load_pattern_or_exit(args.pattern.as_deref(), args.pattern_file.as_deref());
    let nfa = run_common::compile_or_exit(&pattern, args.color);

    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()
    } else {
        args.inputs
    };

    let verdicts = evaluate(&nfa, inputs);

    if args.json {
        match serde_json::to_string_pretty(&verdicts) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_verdicts(&verdicts, Colors::new(args.color)));
    }

    if args.check && verdicts.iter().any(|v| !v.accepted) {
        std::process::exit(1);
    }
}

/// Inputs fall back to stdin lines, which is only possible when stdin does
/// not already carry the pattern.
pub fn check_input_source(args: &ExecArgs) -> Result<(), LoadError> {
    if args.inputs.is_empty()
        && pattern_reads_stdin(args.pattern.as_deref(), args.pattern_file.as_deref())
    {
        return Err(LoadError::StdinTaken);
    }
    Ok(())
}

pub fn evaluate(nfa: &Nfa, inputs: Vec<String>) -> Vec<Verdict> {
    inputs
        .into_iter()
        .map(|input| {
            let accepted = nfa.simulate(&input);
            log::debug!("{input:?}: {}", if accepted { "accept" } else { "reject" });
            Verdict { input, accepted }
        })
        .collect()
}

/// One line per input: the verdict, then the input quoted.
pub fn render_verdicts(verdicts: &[Verdict], colors: Colors) -> String {
    let mut out = String::new();
    for v in verdicts {
        let (color, word) = if v.accepted {
            (colors.green, "accept")
        } else {
            (colors.red, "reject")
        };
        out.push_str(&format!("{color}{word}{} {:?}\n", colors.reset, v.input));
    }
    out
}

fn read_stdin_lines() -> Vec<String> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| {
            eprintln!("error: failed to read stdin: {}", e);
            std::process::exit(1);
        })
}
