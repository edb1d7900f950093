//! Automaton states.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Index into the state arena. Assigned from zero per compilation.
pub type StateId = u32;

/// A single NFA state.
///
/// Transitions are stored in insertion order so dumps and traces are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    id: StateId,
    is_accept: bool,
    transitions: IndexMap<char, IndexSet<StateId>>,
    epsilon_transitions: IndexSet<StateId>,
}

impl State {
    pub fn new(id: StateId, is_accept: bool) -> Self {
        Self {
            id,
            is_accept,
            transitions: IndexMap::new(),
            epsilon_transitions: IndexSet::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    /// Character transitions: character → target states.
    pub fn transitions(&self) -> &IndexMap<char, IndexSet<StateId>> {
        &self.transitions
    }

    pub fn epsilon_transitions(&self) -> &IndexSet<StateId> {
        &self.epsilon_transitions
    }

    /// Targets reachable by consuming `c`.
    pub fn next_on(&self, c: char) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .get(&c)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Returns true if the state has no outgoing transitions at all.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty() && self.epsilon_transitions.is_empty()
    }

    pub(crate) fn set_accept(&mut self, is_accept: bool) {
        self.is_accept = is_accept;
    }

    pub(crate) fn add_transition(&mut self, c: char, to: StateId) {
        self.transitions.entry(c).or_default().insert(to);
    }

    pub(crate) fn add_epsilon_transition(&mut self, to: StateId) {
        self.epsilon_transitions.insert(to);
    }
}
