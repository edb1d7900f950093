//! Closure-based NFA simulation.

use indexmap::IndexSet;

use super::trace::{NoopTracer, Tracer};
use crate::nfa::{Nfa, StateId};

/// Set of active states, kept sorted by id after every closure.
pub type StateSet = IndexSet<StateId>;

/// Every state reachable from `states` using ε-edges only (including `states`).
///
/// Worklist with a visited set: ε-cycles from `*` and `+` terminate, and
/// deep nesting cannot exhaust the call stack.
pub fn epsilon_closure(nfa: &Nfa, states: impl IntoIterator<Item = StateId>) -> StateSet {
    let mut closure = StateSet::new();
    let mut stack = Vec::new();

    for id in states {
        if closure.insert(id) {
            stack.push(id);
        }
    }

    while let Some(id) = stack.pop() {
        for &next in nfa.state(id).epsilon_transitions() {
            if closure.insert(next) {
                stack.push(next);
            }
        }
    }

    closure.sort_unstable();
    closure
}

/// States reachable from `current` by consuming `c`, before closure.
pub fn step(nfa: &Nfa, current: &StateSet, c: char) -> StateSet {
    current
        .iter()
        .flat_map(|&id| nfa.state(id).next_on(c))
        .collect()
}

/// Runs an automaton over input, reporting progress to a `Tracer`.
pub struct Simulator<'n, T = NoopTracer> {
    nfa: &'n Nfa,
    tracer: T,
}

impl<'n> Simulator<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        Self {
            nfa,
            tracer: NoopTracer,
        }
    }
}

impl<'n, T: Tracer> Simulator<'n, T> {
    pub fn with_tracer(nfa: &'n Nfa, tracer: T) -> Self {
        Self { nfa, tracer }
    }

    /// Accepts iff some accepting state is active after the whole input.
    ///
    /// Rejects as soon as the active set becomes empty.
    pub fn run(&mut self, input: &str) -> bool {
        let nfa = self.nfa;
        let mut current = epsilon_closure(nfa, [nfa.start()]);
        self.tracer.trace_start(&current);

        for (index, c) in input.chars().enumerate() {
            current = epsilon_closure(nfa, step(nfa, &current, c));
            self.tracer.trace_step(index, c, &current);

            if current.is_empty() {
                log::trace!("no live states after {c:?} at {index}");
                self.tracer.trace_finish(false);
                return false;
            }
        }

        let accepted = current.iter().any(|&id| nfa.state(id).is_accept());
        self.tracer.trace_finish(accepted);
        accepted
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }
}
