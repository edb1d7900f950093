//! Thompson construction: fragments and their combinators.
//!
//! States live in a flat vector and are referenced by `StateId`. Every
//! expression compiles to a `Fragment` with one start and one accept state.
//! Combinators wire fragments together with ε-edges and demote the absorbed
//! accept states, so a finished fragment has exactly one accepting state.

use super::automaton::Nfa;
use super::state::{State, StateId};
use crate::parser::{Children, Expr};

/// A partial automaton with single entry and exit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

impl Fragment {
    pub fn new(start: StateId, accept: StateId) -> Self {
        Self { start, accept }
    }
}

/// Mutable state arena used during construction.
///
/// Ids start at zero for every builder, so two compilations of the same
/// pattern produce identical graphs.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state, returning its ID.
    pub fn add_state(&mut self, is_accept: bool) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(State::new(id, is_accept));
        id
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id as usize]
    }

    /// Number of states allocated so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add an ε-edge.
    pub fn connect(&mut self, from: StateId, to: StateId) {
        self.state_mut(from).add_epsilon_transition(to);
    }

    /// Add an edge consuming `c`.
    pub fn connect_on(&mut self, from: StateId, c: char, to: StateId) {
        self.state_mut(from).add_transition(c, to);
    }

    /// Turn a fragment's accept state into an internal state.
    fn demote(&mut self, fragment: Fragment) {
        self.state_mut(fragment.accept).set_accept(false);
    }

    /// Fresh start/accept pair for a wrapping combinator.
    fn wrapper(&mut self) -> Fragment {
        let start = self.add_state(false);
        let accept = self.add_state(true);
        Fragment::new(start, accept)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Single character: `start --c--> accept`.
    pub fn literal(&mut self, c: char) -> Fragment {
        let fragment = self.wrapper();
        self.connect_on(fragment.start, c, fragment.accept);
        fragment
    }

    /// Sequence: `left → right`. Allocates no states.
    ///
    /// ```text
    /// left.start ─→ … ─→ left.accept ─ε→ right.start ─→ … ─→ right.accept
    /// ```
    pub fn concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.connect(left.accept, right.start);
        self.demote(left);
        Fragment::new(left.start, right.accept)
    }

    /// Alternation: `left|right`.
    ///
    /// ```text
    ///          ┌─ε→ left ──ε─┐
    /// start ───┤             ├──→ accept
    ///          └─ε→ right ─ε─┘
    /// ```
    pub fn alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let fragment = self.wrapper();

        self.connect(fragment.start, left.start);
        self.connect(fragment.start, right.start);
        self.connect(left.accept, fragment.accept);
        self.connect(right.accept, fragment.accept);
        self.demote(left);
        self.demote(right);

        fragment
    }

    /// Zero or more: `inner*`
    ///
    /// ```text
    ///               ┌────ε─────┐
    ///               ↓          │
    /// start ─ε→ inner.start … inner.accept ─ε→ accept
    ///   │                                        ↑
    ///   └──────────────────ε─────────────────────┘
    /// ```
    pub fn zero_or_more(&mut self, inner: Fragment) -> Fragment {
        let fragment = self.wrapper();

        self.connect(fragment.start, inner.start);
        self.connect(fragment.start, fragment.accept);
        self.connect(inner.accept, inner.start);
        self.connect(inner.accept, fragment.accept);
        self.demote(inner);

        fragment
    }

    /// One or more: `inner+`. Like `zero_or_more` without the skip edge.
    pub fn one_or_more(&mut self, inner: Fragment) -> Fragment {
        let fragment = self.wrapper();

        self.connect(fragment.start, inner.start);
        self.connect(inner.accept, inner.start);
        self.connect(inner.accept, fragment.accept);
        self.demote(inner);

        fragment
    }

    /// Zero or one: `inner?`. Like `zero_or_more` without the back-edge.
    ///
    /// The textbook variant also loops `inner.accept → inner.start`, which
    /// would let `a?` accept `aa`. It is left out on purpose so that `p?`
    /// and `p` agree on every non-empty input.
    ///
    /// ```text
    /// start ─ε→ inner.start … inner.accept ─ε→ accept
    ///   │                                        ↑
    ///   └──────────────────ε─────────────────────┘
    /// ```
    pub fn optional(&mut self, inner: Fragment) -> Fragment {
        let fragment = self.wrapper();

        self.connect(fragment.start, inner.start);
        self.connect(fragment.start, fragment.accept);
        self.connect(inner.accept, fragment.accept);
        self.demote(inner);

        fragment
    }

    // ─────────────────────────────────────────────────────────────────────
    // AST Lowering
    // ─────────────────────────────────────────────────────────────────────

    /// Compile an expression into a fragment, children first.
    ///
    /// States are allocated in the same order as a left-to-right recursive
    /// walk would allocate them, without using the call stack.
    pub fn build(&mut self, expr: &Expr) -> Fragment {
        expr.fold(|node, children| match (node, children) {
            (Expr::Literal(c) | Expr::Digit(c), _) => self.literal(*c),
            (Expr::Star(_), Children::Unary(inner)) => self.zero_or_more(inner),
            (Expr::Plus(_), Children::Unary(inner)) => self.one_or_more(inner),
            (Expr::Optional(_), Children::Unary(inner)) => self.optional(inner),
            (Expr::Or(..), Children::Binary(left, right)) => self.alternation(left, right),
            (Expr::Concat(..), Children::Binary(left, right)) => self.concat(left, right),
            _ => unreachable!("children match the node's arity"),
        })
    }

    /// Freeze the arena into an automaton rooted at `fragment`.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        Nfa::new(self.states, fragment.start, fragment.accept)
    }
}

/// Compile an expression into a standalone automaton.
pub fn build(expr: &Expr) -> Nfa {
    let mut builder = NfaBuilder::new();
    let fragment = builder.build(expr);
    builder.finish(fragment)
}
