pub mod ast;
pub mod check;
pub mod dump;
pub mod exec;
pub mod pattern_loader;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod render_tests;
