//! Token kinds for the pattern language.
//!
//! `TokenKind` derives its recognition rules with Logos. `Char` and `End`
//! carry no rule: `Char` is the catch-all for every character Logos does
//! not recognize, and `End` is synthesized once input runs out.

use std::fmt;
use std::ops::Range;

use logos::Logos;

/// Byte range of a token in the pattern.
pub type Span = Range<usize>;

/// All token kinds. `#[repr(u8)]` keeps discriminants below `TokenSet` capacity.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Literal character (catch-all).
    Char = 0,

    #[regex(r"[0-9]")]
    Digit,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Optional,

    #[token("|")]
    Or,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("ε")]
    Epsilon,

    /// End of input. Returned forever once the pattern is exhausted.
    End,

    #[regex(r"\s+")]
    #[doc(hidden)]
    Whitespace, // Lexer-internal only
}

use TokenKind::*;

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Char => "character",
            Digit => "digit",
            Star => "`*`",
            Plus => "`+`",
            Optional => "`?`",
            Or => "`|`",
            LParen => "`(`",
            RParen => "`)`",
            Epsilon => "`ε`",
            End => "end of pattern",
            Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexed token: kind, the character it was produced from, and its span.
///
/// `value` is `None` only for `End`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<char>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: char, span: Span) -> Self {
        Self {
            kind,
            value: Some(value),
            span,
        }
    }

    #[inline]
    pub fn end(offset: usize) -> Self {
        Self {
            kind: End,
            value: None,
            span: offset..offset,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(c) => write!(f, "{:?}({:?})", self.kind, c),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// Bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u16);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 16.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 16, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        let kind = kind as u8;
        assert!(kind < 16, "TokenKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u8;
        if kind >= 16 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ALL: [TokenKind; 11] = [
            Char, Digit, Star, Plus, Optional, Or, LParen, RParen, Epsilon, End, Whitespace,
        ];
        f.debug_set()
            .entries(ALL.iter().filter(|k| self.contains(**k)))
            .finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of `factor`; also what triggers implicit concatenation.
    pub const FACTOR_FIRST: TokenSet = TokenSet::new(&[Char, Digit, Epsilon, LParen]);

    /// Postfix repetition operators.
    pub const QUANTIFIERS: TokenSet = TokenSet::new(&[Star, Plus, Optional]);
}
