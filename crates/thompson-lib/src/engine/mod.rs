//! Automaton execution.
//!
//! Subset simulation: the simulator tracks every state the automaton could
//! be in, so there is no backtracking and each input character costs at most
//! O(states × out-degree).

mod simulate;
mod trace;


pub use simulate::{Simulator, StateSet, epsilon_closure, step};
pub use trace::{NoopTracer, PrintTracer, Tracer};
