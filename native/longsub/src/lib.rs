//! Longest substring of a word accepted by a finite automaton with epsilon edges.
//!
//! The automaton is built from vertices, labeled edges and a terminal set,
//! then condensed so that its epsilon edges form a DAG. A memoized longest-walk
//! computation over (vertex, position) pairs then yields the leftmost longest
//! substring of the word that the automaton accepts from its initial vertex.
//!
//! ```
//! use longsub::{Automaton, Edge, longest_accepted_substring};
//!
//! // ab+
//! let automaton = Automaton::build(2, [Edge::new(0, 'a', 1), Edge::new(1, 'b', 1)], [1])?;
//! let condensed = automaton.condense();
//! assert_eq!(longest_accepted_substring(&condensed, "xxabbbyy"), "abbb");
//! # Ok::<(), longsub::AutomatonError>(())
//! ```

pub mod automaton;
pub mod error;
pub mod finder;
pub mod input;
pub mod solver;

#[cfg(feature = "python")]
mod python_bindings;

pub use automaton::{Automaton, CondensedAutomaton, Edge, VertexId};
pub use error::{AutomatonError, InputError};
pub use finder::{LongestSubstringFinder, SubstringMatch, longest_accepted_substring};
pub use input::Problem;
pub use solver::{LongestWalkSolver, Step, WalkEntry};
