use std::path::PathBuf;

use super::run_common;

pub struct CheckArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let pattern =
        run_common::load_pattern_or_exit(args.pattern.as_deref(), args.pattern_file.as_deref());

    run_common::compile_or_exit(&pattern, args.color);

    // Silent on success (like cargo check)
}
