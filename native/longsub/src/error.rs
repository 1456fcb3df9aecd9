//! Error types for automaton construction and input parsing.

use thiserror::Error;

use crate::automaton::VertexId;

/// Errors raised while building an [`Automaton`](crate::Automaton).
///
/// Any of these is fatal to the build: no partially built automaton is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// An edge label is neither a lowercase letter nor the epsilon marker.
    #[error("invalid edge label {label:?}: expected one of a-z or '$'")]
    InvalidLabel { label: char },

    /// An edge endpoint or terminal refers to a vertex that does not exist.
    #[error("vertex {vertex} is out of range for an automaton with {num_vertices} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        num_vertices: usize,
    },

    /// The vertex count does not fit the vertex id type or the transition index.
    #[error("automaton with {num_vertices} vertices exceeds the limit of {max} vertices")]
    TooManyVertices { num_vertices: usize, max: usize },

    /// The automaton has no vertices, so there is no initial vertex 0.
    #[error("automaton must have at least one vertex")]
    Empty,
}

/// Errors raised while tokenizing the textual problem format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input ended before a required field.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token that should be a non-negative integer is not one.
    #[error("expected {expected}, found {token:?}")]
    InvalidInteger {
        expected: &'static str,
        token: String,
    },

    /// An edge label token is not exactly one character long.
    #[error("edge label must be a single character, found {token:?}")]
    InvalidLabelToken { token: String },

    /// The parsed fields do not describe a valid automaton.
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
