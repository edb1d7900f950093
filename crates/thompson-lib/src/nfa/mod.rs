//! Automaton model and Thompson construction.
//!
//! # Architecture
//!
//! ```text
//! Expr (parser) → NfaBuilder (fragments over a state arena) → Nfa
//! ```
//!
//! States reference each other by `StateId` (an index into the arena), which
//! keeps the cyclic ε-graphs of `*` and `+` free of shared ownership.

mod automaton;
mod build;
mod dump;
mod state;


pub use automaton::Nfa;
pub use build::{Fragment, NfaBuilder, build};
pub use dump::NfaPrinter;
pub use state::{State, StateId};
