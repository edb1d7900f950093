//! Parser state and low-level token operations.
//!
//! The parser holds exactly one token of lookahead (`current`) and pulls the
//! next one from the lexer on every `bump`. The first error aborts parsing.

use super::ast::Expr;
use super::lexer::Lexer;
use super::token::{Token, TokenKind, TokenSet};
use crate::{Error, Expected, Result};

/// Maximum group nesting accepted by default.
pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    depth: u32,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Parses a complete pattern: `expr END`.
    pub fn parse(mut self) -> Result<Expr> {
        let root = self.expr()?;
        self.eat(TokenKind::End)?;
        Ok(root)
    }

    pub(super) fn current(&self) -> TokenKind {
        self.current.kind
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current.kind)
    }

    /// Consumes the current token unconditionally and returns it.
    pub(super) fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it has the expected kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.currently_is(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(Expected::Token(kind)))
        }
    }

    pub(super) fn unexpected(&self, expected: Expected) -> Error {
        Error::UnexpectedToken {
            expected,
            found: self.current.kind,
            span: self.current.span.clone(),
        }
    }

    /// Called when a group opens. Fails once nesting passes the limit.
    pub(super) fn enter_group(&mut self) -> Result<()> {
        if self.depth >= self.recursion_limit {
            return Err(Error::RecursionLimitExceeded {
                span: self.current.span.clone(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Scan position of the underlying lexer.
    pub fn position(&self) -> usize {
        self.lexer.position()
    }
}
