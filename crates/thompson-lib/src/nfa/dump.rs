//! Text rendering of automata for inspection and snapshot testing.
//!
//! ```text
//! start = N2
//! accept = N3
//!
//! N0: 'a' → N1
//! N1: ε → N0, N3
//! N2: ε → N0, N3
//! N3: ∅ [accept]
//! ```
//!
//! Character edges come first (quoted, in insertion order), then ε-edges.
//! A state with no outgoing edges prints `∅`.

use std::fmt;

use indexmap::IndexSet;

use super::automaton::Nfa;
use super::state::{State, StateId};
use crate::Colors;

/// Printer for `Nfa` with configurable output options.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
    header: bool,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
            header: true,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    /// Include the `start = …` / `accept = …` header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn format_state(&self, f: &mut fmt::Formatter<'_>, state: &State) -> fmt::Result {
        let c = &self.colors;
        write!(f, "{}: ", self.id(state.id()))?;

        if state.is_terminal() {
            write!(f, "{}∅{}", c.dim, c.reset)?;
        }

        let mut first = true;
        for (ch, targets) in state.transitions() {
            if !first {
                write!(f, "{}; {}", c.dim, c.reset)?;
            }
            first = false;
            write!(f, "{}{:?}{} ", c.green, ch, c.reset)?;
            self.format_targets(f, targets)?;
        }

        if !state.epsilon_transitions().is_empty() {
            if !first {
                write!(f, "{}; {}", c.dim, c.reset)?;
            }
            write!(f, "{}ε{} ", c.dim, c.reset)?;
            self.format_targets(f, state.epsilon_transitions())?;
        }

        if state.is_accept() {
            write!(f, " {}[accept]{}", c.green, c.reset)?;
        }

        Ok(())
    }

    fn format_targets(&self, f: &mut fmt::Formatter<'_>, targets: &IndexSet<StateId>) -> fmt::Result {
        let c = &self.colors;
        write!(f, "{}→{} ", c.dim, c.reset)?;
        for (i, target) in targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.id(*target))?;
        }
        Ok(())
    }

    fn id(&self, id: StateId) -> String {
        format!("{}N{}{}", self.colors.blue, id, self.colors.reset)
    }
}

impl fmt::Display for NfaPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            writeln!(f, "start = {}", self.id(self.nfa.start()))?;
            writeln!(f, "accept = {}", self.id(self.nfa.accept()))?;
            writeln!(f)?;
        }

        for state in self.nfa.states() {
            self.format_state(f, state)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
