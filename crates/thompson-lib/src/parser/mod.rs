//! Pattern parser: tokens in, `Expr` out.
//!
//! # Architecture
//!
//! ```text
//! pattern text → Lexer (pull-based, logos) → Parser (recursive descent) → Expr
//! ```
//!
//! The parser is strict: the first unexpected token aborts with an
//! `Error::UnexpectedToken` and no partial tree is returned. Group nesting is
//! the only recursion in the parser and is bounded by a recursion limit.
//! Concatenation and postfix chains are parsed by loops, and the tree walks
//! in `ast` use explicit stacks, so long patterns never grow the call stack.

pub mod ast;
pub mod lexer;
pub mod token;

mod core;
mod grammar;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Children, Expr};
pub use self::core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use lexer::{Lexer, lex};
pub use token::{Span, Token, TokenKind, TokenSet};

use crate::Result;

/// Main entry point with the default recursion limit.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(Lexer::new(source)).parse()
}
