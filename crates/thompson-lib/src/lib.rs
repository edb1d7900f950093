//! Thompson: regular expressions compiled to NFAs and run by subset simulation.
//!
//! Supported syntax: literal characters, digits, grouping `( )`, alternation
//! `|`, postfix `*` `+` `?`, and the literal `ε`. Concatenation is implicit.
//! Whitespace in a pattern is ignored.
//!
//! # Example
//!
//! ```
//! let nfa = thompson_lib::compile("(a|b)*c").expect("valid pattern");
//!
//! assert!(nfa.simulate("abbac"));
//! assert!(!nfa.simulate("abba"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod engine;
pub mod nfa;
pub mod parser;

#[cfg(test)]
mod diagnostics_tests;

use std::fmt;

pub use colors::Colors;
pub use compile::{CompileConfig, Compiler, compile};
pub use diagnostics::ErrorPrinter;
pub use nfa::{Nfa, State, StateId};
pub use parser::{Expr, Span, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token (from `eat`).
    Token(TokenKind),
    /// Anything that can start a factor: character, digit, `ε` or `(`.
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(kind.describe()),
            Expected::Expression => f.write_str("an expression"),
        }
    }
}

/// Errors that can occur during pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The current token cannot begin or continue the production being parsed.
    #[error("expected {expected}, found {found} at position {}", .span.start)]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        span: Span,
    },

    /// Groups nested deeper than the configured limit.
    #[error("recursion limit exceeded at position {}", .span.start)]
    RecursionLimitExceeded { span: Span },
}

impl Error {
    /// Byte range of the offending token.
    pub fn span(&self) -> &Span {
        match self {
            Error::UnexpectedToken { span, .. } | Error::RecursionLimitExceeded { span } => span,
        }
    }

    /// Message without the position, for snippet titles.
    pub fn title(&self) -> String {
        match self {
            Error::UnexpectedToken {
                expected, found, ..
            } => format!("expected {expected}, found {found}"),
            Error::RecursionLimitExceeded { .. } => "recursion limit exceeded".to_string(),
        }
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> ErrorPrinter<'a> {
        ErrorPrinter::new(self).source(source)
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
