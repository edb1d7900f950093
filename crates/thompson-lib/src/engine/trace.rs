//! Tracing infrastructure for debugging simulation.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an empty
//! `#[inline(always)]` function and the calls compile away. No tracing
//! state lives in the simulator itself.
//!
//! `PrintTracer` collects one line per event:
//!
//! ```text
//! start → {N0, N2, N3✓}
//! 0 'a' → {N0, N1, N3✓}
//! 1 'c' → ∅
//! reject
//! ```
//!
//! Accepting states carry a `✓`.

use crate::Colors;
use crate::nfa::Nfa;

use super::simulate::StateSet;

/// Tracer trait for simulator instrumentation.
///
/// - `trace_start` - after the initial ε-closure
/// - `trace_step` - after consuming one character and closing over ε-edges
/// - `trace_finish` - once the verdict is known (also on early rejection)
pub trait Tracer {
    fn trace_start(&mut self, states: &StateSet);

    /// `index` counts characters, not bytes.
    fn trace_step(&mut self, index: usize, c: char, states: &StateSet);

    fn trace_finish(&mut self, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _states: &StateSet) {}

    #[inline(always)]
    fn trace_step(&mut self, _index: usize, _c: char, _states: &StateSet) {}

    #[inline(always)]
    fn trace_finish(&mut self, _accepted: bool) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace_start(&mut self, states: &StateSet) {
        (**self).trace_start(states);
    }

    fn trace_step(&mut self, index: usize, c: char, states: &StateSet) {
        (**self).trace_step(index, c, states);
    }

    fn trace_finish(&mut self, accepted: bool) {
        (**self).trace_finish(accepted);
    }
}

/// Tracer that collects a human-readable execution log.
pub struct PrintTracer<'n> {
    /// Needed to mark accepting states.
    nfa: &'n Nfa,
    /// Collected trace lines.
    lines: Vec<String>,
    colors: Colors,
}

impl<'n> PrintTracer<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        Self {
            nfa,
            lines: Vec::new(),
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_set(&self, states: &StateSet) -> String {
        let c = &self.colors;
        if states.is_empty() {
            return format!("{}∅{}", c.dim, c.reset);
        }

        let items: Vec<String> = states
            .iter()
            .map(|&id| {
                if self.nfa.state(id).is_accept() {
                    format!("{}N{}✓{}", c.green, id, c.reset)
                } else {
                    format!("{}N{}{}", c.blue, id, c.reset)
                }
            })
            .collect();
        format!("{{{}}}", items.join(", "))
    }

    fn arrow(&self) -> String {
        format!("{}→{}", self.colors.dim, self.colors.reset)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_start(&mut self, states: &StateSet) {
        let line = format!("start {} {}", self.arrow(), self.format_set(states));
        self.lines.push(line);
    }

    fn trace_step(&mut self, index: usize, ch: char, states: &StateSet) {
        let c = &self.colors;
        let line = format!(
            "{} {}{:?}{} {} {}",
            index,
            c.green,
            ch,
            c.reset,
            self.arrow(),
            self.format_set(states)
        );
        self.lines.push(line);
    }

    fn trace_finish(&mut self, accepted: bool) {
        let c = &self.colors;
        let line = if accepted {
            format!("{}accept{}", c.green, c.reset)
        } else {
            format!("{}reject{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}
