//! Trace the simulation for debugging.

use std::path::PathBuf;

use thompson_lib::engine::{PrintTracer, Simulator};

use super::run_common;

pub struct TraceArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub input: String,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let pattern =
        run_common::load_pattern_or_exit(args.pattern.as_deref(), args.pattern_file.as_deref());
    let nfa = run_common::compile_or_exit(&pattern, args.color);

    let mut tracer = PrintTracer::new(&nfa).colored(args.color);
    let accepted = Simulator::with_tracer(&nfa, &mut tracer).run(&args.input);
    tracer.print();

    if !accepted {
        std::process::exit(1);
    }
}
