//! Show the syntax tree or token stream of a pattern.

use std::path::PathBuf;

use thompson_lib::Colors;
use thompson_lib::parser::{self, Token};

use super::run_common::{self, render_error};

pub struct AstArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub tokens: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let pattern =
        run_common::load_pattern_or_exit(args.pattern.as_deref(), args.pattern_file.as_deref());

    if args.tokens {
        let tokens = parser::lex(&pattern.text);
        print!("{}", render_tokens(&tokens, Colors::new(args.color)));
        return;
    }

    match parser::parse(&pattern.text) {
        Ok(expr) => println!("{}", expr),
        Err(e) => {
            eprint!("{}", render_error(&e, &pattern, args.color));
            std::process::exit(1);
        }
    }
}

/// One token per line: `0..1 Char('a')`.
pub fn render_tokens(tokens: &[Token], colors: Colors) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{}{:?}{} {}\n",
            colors.dim, token.span, colors.reset, token
        ));
    }
    out
}
