//! Finite automata over `a..=z` with epsilon edges.
//!
//! This module provides:
//! - Label ids for the 26 letters and epsilon
//! - Automaton construction with per-vertex, per-label transition lookup
//! - Epsilon closure and whole-word acceptance
//! - Condensation of epsilon cycles (Kosaraju's SCC algorithm)

mod condense;
mod nfa;
mod state;
mod symbol;

pub use condense::{CondensedAutomaton, epsilon_components};
pub use nfa::{Automaton, Edge, MAX_VERTICES, Transition};
pub use state::{VertexId, VertexSet};
pub use symbol::{
    EPSILON, EPSILON_CHAR, Label, NUM_LABELS, is_epsilon, label_char, label_of, letter_of_byte,
};
