//! Pull-based lexer for patterns.
//!
//! Wraps the Logos-generated scanner and post-processes its output:
//! - Whitespace runs are dropped
//! - Input Logos rejects is split into one `Char` token per character
//! - `End` is produced forever once input is exhausted
//!
//! Lexing never fails: every character maps to some token.

use std::collections::VecDeque;

use logos::Logos;

use super::token::{Token, TokenKind};

pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    /// Characters from a rejected slice, not yet handed out.
    pending: VecDeque<Token>,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            pending: VecDeque::new(),
            pos: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset just past the last token handed out.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the next token, advancing the scan position.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        self.pos = token.span.end;
        token
    }

    fn scan(&mut self) -> Token {
        if let Some(token) = self.pending.pop_front() {
            return token;
        }

        loop {
            match self.inner.next() {
                Some(Ok(kind)) if kind.is_trivia() => continue,
                Some(Ok(kind)) => {
                    let span = self.inner.span();
                    let Some(value) = self.inner.slice().chars().next() else {
                        continue;
                    };
                    return Token::new(kind, value, span);
                }
                Some(Err(())) => {
                    let start = self.inner.span().start;
                    for (offset, c) in self.inner.slice().char_indices() {
                        let at = start + offset;
                        self.pending
                            .push_back(Token::new(TokenKind::Char, c, at..at + c.len_utf8()));
                    }
                    if let Some(token) = self.pending.pop_front() {
                        return token;
                    }
                }
                None => return Token::end(self.source.len()),
            }
        }
    }
}

/// Yields tokens up to, but not including, `End`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

/// Tokenizes the whole pattern. The trailing `End` token is not included.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
