//! PyO3 bindings.
//!
//! Exposes an `Automaton` class that is condensed on construction and can be
//! queried for the longest accepted substring of any number of words.

use crate::automaton::{Automaton as RustAutomaton, CondensedAutomaton, Edge, VertexId};
use crate::error::AutomatonError;
use crate::finder::{LongestSubstringFinder, longest_accepted_substring};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: AutomatonError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn build(
    num_vertices: usize,
    edges: Vec<(VertexId, char, VertexId)>,
    terminals: Vec<VertexId>,
) -> PyResult<CondensedAutomaton> {
    let edges = edges
        .into_iter()
        .map(|(from, label, to)| Edge::new(from, label, to));
    let automaton = RustAutomaton::build(num_vertices, edges, terminals).map_err(to_py_err)?;
    Ok(automaton.condense())
}

/// A finite automaton with its epsilon cycles already collapsed.
#[pyclass(name = "Automaton", module = "longsub", frozen)]
pub struct PyAutomaton {
    condensed: CondensedAutomaton,
}

#[pymethods]
impl PyAutomaton {
    /// Build from `(from, label, to)` edges; `label` is a letter a-z or `'$'`.
    #[new]
    #[pyo3(signature = (num_vertices, edges, terminals))]
    fn new(
        num_vertices: usize,
        edges: Vec<(VertexId, char, VertexId)>,
        terminals: Vec<VertexId>,
    ) -> PyResult<Self> {
        Ok(Self {
            condensed: build(num_vertices, edges, terminals)?,
        })
    }

    /// Number of vertices after condensation.
    #[getter]
    fn num_vertices(&self) -> usize {
        self.condensed.num_vertices()
    }

    #[getter]
    fn init_vertex(&self) -> VertexId {
        self.condensed.init_vertex()
    }

    /// The condensed vertex an original vertex was collapsed into.
    fn component_of(&self, vertex: VertexId) -> PyResult<VertexId> {
        if (vertex as usize) < self.condensed.num_original_vertices() {
            Ok(self.condensed.component_of(vertex))
        } else {
            Err(PyIndexError::new_err(format!("vertex {vertex} out of range")))
        }
    }

    /// Whether the whole word is accepted.
    fn accepts(&self, word: &str) -> bool {
        self.condensed.accepts(word)
    }

    /// Longest accepted substring of `word`, or `""` if there is none.
    fn longest_substring(&self, word: &str) -> String {
        longest_accepted_substring(&self.condensed, word)
    }

    /// `(start, text)` of the longest accepted substring, or `None`.
    fn find(&self, word: &str) -> Option<(usize, String)> {
        LongestSubstringFinder::new(&self.condensed, word)
            .find()
            .map(|found| (found.start, found.text.clone()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Automaton(num_vertices={}, num_edges={}, init_vertex={})",
            self.condensed.num_vertices(),
            self.condensed.edges().len(),
            self.condensed.init_vertex()
        )
    }
}

/// One-shot helper: build, condense and search in a single call.
#[pyfunction]
fn longest_substring(
    num_vertices: usize,
    edges: Vec<(VertexId, char, VertexId)>,
    terminals: Vec<VertexId>,
    word: &str,
) -> PyResult<String> {
    let condensed = build(num_vertices, edges, terminals)?;
    Ok(longest_accepted_substring(&condensed, word))
}

#[pymodule]
#[pyo3(name = "longsub")]
pub fn python_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAutomaton>()?;
    m.add_function(wrap_pyfunction!(longest_substring, m)?)?;
    Ok(())
}
