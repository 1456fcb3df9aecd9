//! Tokenizer for the textual problem format.
//!
//! ```text
//! num_vertices num_edges num_terminals
//! terminal...
//! from label to      (num_edges times, label is a-z or '$')
//! word
//! ```
//!
//! Tokens are separated by arbitrary whitespace, so line breaks carry no meaning.

use std::str::{FromStr, SplitWhitespace};

use crate::automaton::{Automaton, Edge, VertexId};
use crate::error::{AutomatonError, InputError};

/// A parsed problem: the automaton description and the word to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub num_vertices: usize,
    pub terminals: Vec<VertexId>,
    pub edges: Vec<Edge>,
    pub word: String,
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        self.0.next().ok_or(InputError::UnexpectedEof { expected })
    }

    fn next_int<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            expected,
            token: token.to_string(),
        })
    }

    fn next_label(&mut self) -> Result<char, InputError> {
        let token = self.next_token("edge label")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Ok(label),
            _ => Err(InputError::InvalidLabelToken {
                token: token.to_string(),
            }),
        }
    }
}

impl Problem {
    /// Parse a problem from text. A missing word is read as the empty word.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens(text.split_whitespace());

        let num_vertices: usize = tokens.next_int("vertex count")?;
        let num_edges: usize = tokens.next_int("edge count")?;
        let num_terminals: usize = tokens.next_int("terminal count")?;

        let terminals = (0..num_terminals)
            .map(|_| tokens.next_int("terminal vertex"))
            .collect::<Result<Vec<VertexId>, _>>()?;

        let mut edges = Vec::with_capacity(num_edges.min(1 << 20));
        for _ in 0..num_edges {
            let from = tokens.next_int("edge source")?;
            let label = tokens.next_label()?;
            let to = tokens.next_int("edge destination")?;
            edges.push(Edge::new(from, label, to));
        }

        let word = tokens.0.next().unwrap_or_default().to_string();

        Ok(Self {
            num_vertices,
            terminals,
            edges,
            word,
        })
    }

    /// Build the automaton described by this problem.
    pub fn automaton(&self) -> Result<Automaton, AutomatonError> {
        Automaton::build(
            self.num_vertices,
            self.edges.iter().copied(),
            self.terminals.iter().copied(),
        )
    }
}

impl FromStr for Problem {
    type Err = InputError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}
