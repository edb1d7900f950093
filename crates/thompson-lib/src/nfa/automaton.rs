//! Compiled automaton: a frozen state arena plus its start and accept states.

use serde::Serialize;

use super::dump::NfaPrinter;
use super::state::{State, StateId};
use crate::engine::{Simulator, StateSet, epsilon_closure};

/// Nondeterministic finite automaton produced by Thompson's construction.
///
/// States are read-only once built. `accept` is the only accepting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nfa {
    start: StateId,
    accept: StateId,
    states: Vec<State>,
}

impl Nfa {
    pub(crate) fn new(states: Vec<State>, start: StateId, accept: StateId) -> Self {
        Self {
            start,
            accept,
            states,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Get state by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this automaton.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// Iterate over all states in id order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for automata built from a pattern.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Runs the automaton over `input` and reports whether it accepts.
    pub fn simulate(&self, input: &str) -> bool {
        Simulator::new(self).run(input)
    }

    /// States reachable from `states` through ε-edges alone.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = StateId>) -> StateSet {
        epsilon_closure(self, states)
    }

    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }

    /// Plain-text listing of the graph.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
