use crate::{Error, ErrorPrinter, compile};

fn error(pattern: &str) -> Error {
    match compile(pattern) {
        Ok(_) => panic!("expected {pattern:?} to fail"),
        Err(e) => e,
    }
}

#[test]
fn plain_without_source() {
    let err = error("*a");
    insta::assert_snapshot!(
        ErrorPrinter::new(&err).render(),
        @"error: expected an expression, found `*` at position 0"
    );
}

#[test]
fn snippet_points_at_offending_token() {
    let err = error("ab|*");
    let out = err.printer("ab|*").render();

    assert!(out.starts_with("error: expected an expression, found `*`\n"), "{out}");
    assert!(out.contains("1 | ab|*"), "{out}");
    assert!(out.contains("^ quantifier has nothing to repeat"), "{out}");
    assert!(!out.contains("at position"), "{out}");
}

#[test]
fn unclosed_group_label() {
    let err = error("(ab");
    let out = err.printer("(ab").render();

    assert!(out.contains("error: expected `)`, found end of pattern"), "{out}");
    assert!(out.contains("unclosed group"), "{out}");
}

#[test]
fn unexpected_token_label() {
    let err = error("a)");
    let out = err.printer("a)").render();

    assert!(out.contains("error: expected end of pattern, found `)`"), "{out}");
    assert!(out.contains("^ unexpected `)`"), "{out}");
}

#[test]
fn recursion_label() {
    let err = crate::Compiler::new()
        .with_recursion_limit(1)
        .compile("((a))")
        .expect_err("too deep");
    let out = err.printer("((a))").render();

    assert!(out.contains("error: recursion limit exceeded"), "{out}");
    assert!(out.contains("nested too deeply"), "{out}");
}

#[test]
fn path_is_shown() {
    let err = error("|");
    let out = err.printer("|").path("pattern.re").render();
    assert!(out.contains("pattern.re"), "{out}");
}

#[test]
fn colored_output_has_escapes() {
    let err = error("?");
    let plain = err.printer("?").render();
    let colored = err.printer("?").colored(true).render();

    assert!(!plain.contains('\x1b'));
    assert!(colored.contains('\x1b'));
}

#[test]
fn span_accessor() {
    assert_eq!(error("ab)").span(), &(2..3));
    assert_eq!(error("").span(), &(0..0));
}
