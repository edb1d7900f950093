//! Grammar productions, lowest precedence first.
//!
//! ```text
//! expr   := concat { '|' concat }
//! concat := term { term }
//! term   := factor { '*' | '+' | '?' }
//! factor := CHAR | DIGIT | EPSILON | '(' expr ')'
//! ```

use super::ast::Expr;
use super::core::Parser;
use super::token::TokenKind;
use super::token::token_sets::{FACTOR_FIRST, QUANTIFIERS};
use crate::{Expected, Result};

impl Parser<'_> {
    /// Alternation, left-associative.
    pub(super) fn expr(&mut self) -> Result<Expr> {
        let mut node = self.concat()?;

        while self.currently_is(TokenKind::Or) {
            self.bump();
            let right = self.concat()?;
            node = Expr::or(node, right);
        }

        Ok(node)
    }

    /// Implicit concatenation: keep folding while the next token can start a factor.
    pub(super) fn concat(&mut self) -> Result<Expr> {
        let mut node = self.term()?;

        while self.currently_is_one_of(FACTOR_FIRST) {
            let right = self.term()?;
            node = Expr::concat(node, right);
        }

        Ok(node)
    }

    /// Postfix quantifiers, applied left to right: `a*+` is `Plus(Star(a))`.
    pub(super) fn term(&mut self) -> Result<Expr> {
        let mut node = self.factor()?;

        while self.currently_is_one_of(QUANTIFIERS) {
            node = match self.bump().kind {
                TokenKind::Star => Expr::star(node),
                TokenKind::Plus => Expr::plus(node),
                TokenKind::Optional => Expr::optional(node),
                kind => unreachable!("{kind:?} is not a quantifier"),
            };
        }

        Ok(node)
    }

    pub(super) fn factor(&mut self) -> Result<Expr> {
        match self.current() {
            TokenKind::LParen => {
                self.enter_group()?;
                self.bump();
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                self.exit_group();
                Ok(node)
            }
            TokenKind::Char => Ok(Expr::Literal(self.bump_value())),
            TokenKind::Digit => Ok(Expr::Digit(self.bump_value())),
            // `ε` matches the literal character, not the empty string.
            TokenKind::Epsilon => Ok(Expr::Literal(self.bump_value())),
            _ => Err(self.unexpected(Expected::Expression)),
        }
    }

    /// Only `End` lacks a value, and `factor` never bumps `End`.
    fn bump_value(&mut self) -> char {
        self.bump().value.unwrap_or_default()
    }
}
