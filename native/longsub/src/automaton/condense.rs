//! Collapse of epsilon-only cycles.
//!
//! Strongly connected components of the epsilon subgraph are found with
//! Kosaraju's two-pass algorithm and each one becomes a single vertex. The
//! result has an acyclic epsilon subgraph, which the solver relies on.

use crate::automaton::nfa::{Automaton, Transition};
use crate::automaton::state::{VertexId, VertexSet};
use crate::automaton::symbol::is_epsilon;
use std::ops::Deref;

/// An automaton whose epsilon edges form a DAG, plus the mapping from the
/// vertices of the automaton it was condensed from.
#[derive(Debug, Clone)]
pub struct CondensedAutomaton {
    automaton: Automaton,
    /// Component of each original vertex
    component_of: Vec<VertexId>,
}

impl CondensedAutomaton {
    /// The condensed vertex that `original` was collapsed into.
    pub fn component_of(&self, original: VertexId) -> VertexId {
        self.component_of[original as usize]
    }

    /// Number of vertices in the automaton before condensation.
    pub fn num_original_vertices(&self) -> usize {
        self.component_of.len()
    }
}

impl Deref for CondensedAutomaton {
    type Target = Automaton;

    fn deref(&self) -> &Automaton {
        &self.automaton
    }
}

/// Iterative depth-first traversal from `root`.
///
/// `on_finish` is called for each newly visited vertex once all of its
/// successors have been explored, in the same order a recursive DFS would.
fn explore<F>(adjacency: &[Vec<VertexId>], root: VertexId, visited: &mut VertexSet, mut on_finish: F)
where
    F: FnMut(VertexId),
{
    visited.insert(root);
    let mut stack = vec![(root, 0usize)];

    while let Some((vertex, cursor)) = stack.last_mut() {
        if let Some(&next) = adjacency[*vertex as usize].get(*cursor) {
            *cursor += 1;
            if visited.insert(next) {
                stack.push((next, 0));
            }
        } else {
            let vertex = *vertex;
            stack.pop();
            on_finish(vertex);
        }
    }
}

/// Strongly connected components of the epsilon-only subgraph.
///
/// Returns the component id of every vertex and the number of components.
/// Components come out in topological order: an epsilon edge between two
/// distinct components always goes from the lower id to the higher one.
pub fn epsilon_components(automaton: &Automaton) -> (Vec<VertexId>, usize) {
    let num_vertices = automaton.num_vertices();
    let mut forward = vec![Vec::new(); num_vertices];
    let mut reverse = vec![Vec::new(); num_vertices];
    for &(from, label, to) in automaton.edges() {
        if is_epsilon(label) {
            forward[from as usize].push(to);
            reverse[to as usize].push(from);
        }
    }

    // Pass 1: finishing order on the epsilon subgraph
    let mut visited = VertexSet::with_capacity(num_vertices);
    let mut order = Vec::with_capacity(num_vertices);
    for vertex in 0..num_vertices as VertexId {
        if !visited.contains(vertex) {
            explore(&forward, vertex, &mut visited, |v| order.push(v));
        }
    }

    // Pass 2: each tree of the transpose, in reverse finishing order, is one component
    let mut visited = VertexSet::with_capacity(num_vertices);
    let mut component_of: Vec<VertexId> = vec![0; num_vertices];
    let mut num_components = 0usize;
    for &vertex in order.iter().rev() {
        if !visited.contains(vertex) {
            let id = num_components as VertexId;
            explore(&reverse, vertex, &mut visited, |v| component_of[v as usize] = id);
            num_components += 1;
        }
    }

    (component_of, num_components)
}

impl Automaton {
    /// Collapse every epsilon-only cycle into a single vertex.
    ///
    /// Edges are remapped onto components. Epsilon edges that become self-loops
    /// are dropped; every other edge is kept, including letter self-loops. A
    /// component is terminal iff one of its vertices was, and the new initial
    /// vertex is the component of the old one.
    pub fn condense(&self) -> CondensedAutomaton {
        let (component_of, num_components) = epsilon_components(self);

        let mut dropped = 0usize;
        let edges: Vec<Transition> = self
            .edges()
            .iter()
            .filter_map(|&(from, label, to)| {
                let from = component_of[from as usize];
                let to = component_of[to as usize];
                if is_epsilon(label) && from == to {
                    dropped += 1;
                    None
                } else {
                    Some((from, label, to))
                }
            })
            .collect();

        let terminals: VertexSet = self
            .terminals()
            .iter()
            .map(|vertex| component_of[vertex as usize])
            .collect();
        let init_vertex = component_of[self.init_vertex() as usize];

        tracing::debug!(
            num_vertices = self.num_vertices(),
            num_components,
            dropped_epsilon_edges = dropped,
            "condensed epsilon cycles"
        );

        CondensedAutomaton {
            automaton: Automaton::from_parts(num_components, edges, terminals, init_vertex),
            component_of,
        }
    }
}
