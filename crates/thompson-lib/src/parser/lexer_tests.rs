use super::lexer::{Lexer, lex};
use super::token::TokenKind::{self, *};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn values(source: &str) -> String {
    lex(source).into_iter().filter_map(|t| t.value).collect()
}

#[test]
fn operators() {
    assert_eq!(
        kinds("()|*+?ε"),
        vec![LParen, RParen, Or, Star, Plus, Optional, Epsilon]
    );
    assert_eq!(values("()|*+?ε"), "()|*+?ε");
}

#[test]
fn digits_and_chars() {
    assert_eq!(kinds("a1Z9"), vec![Char, Digit, Char, Digit]);
    assert_eq!(values("a1Z9"), "a1Z9");
}

#[test]
fn symbols_are_chars() {
    assert_eq!(kinds(".[]{}^$\\-"), vec![Char; 9]);
    assert_eq!(values(".[]{}^$\\-"), ".[]{}^$\\-");
}

#[test]
fn non_ascii_chars() {
    // Greek letters share a UTF-8 lead byte with `ε`.
    assert_eq!(kinds("αεβ"), vec![Char, Epsilon, Char]);
    assert_eq!(values("αεβ"), "αεβ");
    assert_eq!(kinds("日本"), vec![Char, Char]);
}

#[test]
fn unicode_digits_are_chars() {
    assert_eq!(kinds("٣"), vec![Char]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        kinds("a+1? (c|d)* ε"),
        vec![
            Char, Plus, Digit, Optional, LParen, Char, Or, Char, RParen, Star, Epsilon
        ]
    );
    assert!(kinds(" \t\n ").is_empty());
}

#[test]
fn spans_are_byte_ranges() {
    let tokens = lex("a ε|b");
    let spans: Vec<_> = tokens.iter().map(|t| t.span.clone()).collect();
    assert_eq!(spans, vec![0..1, 2..4, 4..5, 5..6]);
}

#[test]
fn end_is_sticky() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, Char);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, End);
        assert_eq!(token.value, None);
        assert_eq!(token.span, 1..1);
    }
}

#[test]
fn empty_pattern() {
    let mut lexer = Lexer::new("");
    assert!(lexer.next_token().is_end());
    assert_eq!(lexer.position(), 0);
}

#[test]
fn position_tracks_scan() {
    let mut lexer = Lexer::new("ab  c");
    lexer.next_token();
    assert_eq!(lexer.position(), 1);
    lexer.next_token();
    assert_eq!(lexer.position(), 2);
    lexer.next_token();
    assert_eq!(lexer.position(), 5);
}

#[test]
fn token_display() {
    let tokens = lex("a|");
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    insta::assert_snapshot!(rendered.join(" "), @"Char('a') Or('|')");
}
