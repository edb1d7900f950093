//! Compilation entry points: pattern → `Expr` → `Nfa`.

use crate::Result;
use crate::nfa::{self, Nfa};
use crate::parser::{DEFAULT_RECURSION_LIMIT, Expr, Lexer, Parser};

pub struct CompileConfig {
    /// Maximum group nesting depth.
    pub recursion_limit: u32,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Builder for compiling patterns with non-default limits.
///
/// Each call starts from a fresh state arena, so compilations are
/// independent and state ids always start at `N0`.
#[derive(Default)]
pub struct Compiler {
    config: CompileConfig,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    pub fn parse(&self, pattern: &str) -> Result<Expr> {
        Parser::new(Lexer::new(pattern))
            .with_recursion_limit(self.config.recursion_limit)
            .parse()
    }

    pub fn compile(&self, pattern: &str) -> Result<Nfa> {
        let expr = self.parse(pattern).inspect_err(|e| {
            log::debug!("failed to parse {pattern:?}: {e}");
        })?;
        let nfa = nfa::build(&expr);
        log::debug!(
            "compiled {pattern:?}: {} ast nodes, {} states",
            expr.size(),
            nfa.len()
        );
        Ok(nfa)
    }
}

/// Compiles a pattern with default settings.
pub fn compile(pattern: &str) -> Result<Nfa> {
    Compiler::new().compile(pattern)
}
