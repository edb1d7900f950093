use std::path::PathBuf;

use super::run_common;

pub struct DumpArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern =
        run_common::load_pattern_or_exit(args.pattern.as_deref(), args.pattern_file.as_deref());
    let nfa = run_common::compile_or_exit(&pattern, args.color);

    if args.json {
        match serde_json::to_string_pretty(&nfa) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize automaton: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", nfa.printer().colored(args.color));
}
