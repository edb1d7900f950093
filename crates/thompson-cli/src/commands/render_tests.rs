use std::path::PathBuf;

use thompson_lib::parser::lex;
use thompson_lib::{Colors, compile};

use super::ast::render_tokens;
use super::exec::{ExecArgs, Verdict, check_input_source, evaluate, render_verdicts};
use super::pattern_loader::{LoadError, LoadedPattern};
use super::run_common::render_error;

fn inputs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn tokens_with_spans() {
    let out = render_tokens(&lex("a ε|1*"), Colors::OFF);
    insta::assert_snapshot!(out, @r"
    0..1 Char('a')
    2..4 Epsilon('ε')
    4..5 Or('|')
    5..6 Digit('1')
    6..7 Star('*')
    ");
}

#[test]
fn verdicts() {
    let nfa = compile("(a|b)*c").unwrap();
    let verdicts = evaluate(&nfa, inputs(&["abc", "ab", "", "c"]));

    insta::assert_snapshot!(render_verdicts(&verdicts, Colors::OFF), @r#"
    accept "abc"
    reject "ab"
    reject ""
    accept "c"
    "#);
}

#[test]
fn colored_verdicts() {
    let verdicts = vec![
        Verdict {
            input: "a".to_string(),
            accepted: true,
        },
        Verdict {
            input: "b".to_string(),
            accepted: false,
        },
    ];
    let out = render_verdicts(&verdicts, Colors::ON);
    assert_eq!(
        out,
        "\x1b[32maccept\x1b[0m \"a\"\n\x1b[31mreject\x1b[0m \"b\"\n"
    );
}

#[test]
fn verdicts_json() {
    let nfa = compile("a+").unwrap();
    let verdicts = evaluate(&nfa, inputs(&["aa", "b"]));
    let json = serde_json::to_string(&verdicts).unwrap();
    insta::assert_snapshot!(json, @r#"[{"input":"aa","accepted":true},{"input":"b","accepted":false}]"#);
}

#[test]
fn error_rendering_includes_path() {
    let pattern = LoadedPattern {
        text: "(a".to_string(),
        path: Some("pattern.re".to_string()),
    };
    let err = compile(&pattern.text).unwrap_err();
    let out = render_error(&err, &pattern, false);

    assert!(out.contains("error: expected `)`, found end of pattern"), "{out}");
    assert!(out.contains("pattern.re"), "{out}");
    assert!(out.contains("unclosed group"), "{out}");
}

fn exec_args(pattern_file: &str, inputs: &[&str]) -> ExecArgs {
    ExecArgs {
        pattern: None,
        pattern_file: Some(PathBuf::from(pattern_file)),
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        json: false,
        check: true,
        color: false,
    }
}

#[test]
fn stdin_pattern_requires_explicit_inputs() {
    let err = check_input_source(&exec_args("-", &[])).unwrap_err();
    assert!(matches!(err, LoadError::StdinTaken));
    assert_eq!(
        err.to_string(),
        "inputs must be given as arguments when the pattern is read from stdin"
    );

    assert!(check_input_source(&exec_args("-", &["abc"])).is_ok());
    assert!(check_input_source(&exec_args("pattern.re", &[])).is_ok());
}
