//! Shared logic for loading and compiling the pattern of every command.

use std::path::Path;

use thompson_lib::{Error, Nfa};

use super::pattern_loader::{LoadedPattern, load_pattern};

/// Load the pattern or exit with status 1.
pub fn load_pattern_or_exit(pattern: Option<&str>, pattern_file: Option<&Path>) -> LoadedPattern {
    load_pattern(pattern, pattern_file).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Render a compile error against its pattern.
pub fn render_error(error: &Error, pattern: &LoadedPattern, color: bool) -> String {
    let mut printer = error.printer(&pattern.text).colored(color);
    if let Some(path) = &pattern.path {
        printer = printer.path(path);
    }
    printer.render()
}

/// Compile the pattern, or print the diagnostic and exit with status 1.
pub fn compile_or_exit(pattern: &LoadedPattern, color: bool) -> Nfa {
    thompson_lib::compile(&pattern.text).unwrap_or_else(|e| {
        eprint!("{}", render_error(&e, pattern, color));
        std::process::exit(1);
    })
}
