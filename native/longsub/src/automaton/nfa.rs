//! Non-deterministic finite automaton over `a..=z` with epsilon edges.

use crate::automaton::state::{VertexId, VertexSet};
use crate::automaton::symbol::{EPSILON, Label, NUM_LABELS, label_char, label_of, letter_of_byte};
use crate::error::AutomatonError;
use indexmap::IndexMap;

/// Largest vertex count an automaton may have; every id must fit in a [`VertexId`].
pub const MAX_VERTICES: usize = VertexId::MAX as usize;

/// An edge as supplied by callers: the label is still a raw character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub label: char,
    pub to: VertexId,
}

impl Edge {
    pub fn new(from: VertexId, label: char, to: VertexId) -> Self {
        Self { from, label, to }
    }
}

/// A validated edge: (source, label, destination).
pub type Transition = (VertexId, Label, VertexId);

/// A finite automaton with a single initial vertex and a set of terminal vertices.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Number of vertices (vertices are numbered 0..num_vertices)
    num_vertices: usize,
    /// Initial vertex
    init_vertex: VertexId,
    /// Terminal (accepting) vertices
    terminals: VertexSet,
    /// Edges in insertion order
    edges: Vec<Transition>,
    /// Start of each `vertex * NUM_LABELS + label` slot in `targets`
    offsets: Vec<usize>,
    /// Destinations grouped by slot, in insertion order within a slot
    targets: Vec<VertexId>,
}

impl Automaton {
    /// Build an automaton whose initial vertex is 0.
    ///
    /// Fails if a label is not `a..=z` or `$`, if an endpoint or terminal is not
    /// a valid vertex, or if `num_vertices` is zero or above [`MAX_VERTICES`].
    pub fn build<E, T>(num_vertices: usize, edges: E, terminals: T) -> Result<Self, AutomatonError>
    where
        E: IntoIterator<Item = Edge>,
        T: IntoIterator<Item = VertexId>,
    {
        if num_vertices == 0 {
            return Err(AutomatonError::Empty);
        }
        if num_vertices > MAX_VERTICES || num_vertices.checked_mul(NUM_LABELS + 1).is_none() {
            return Err(AutomatonError::TooManyVertices {
                num_vertices,
                max: MAX_VERTICES,
            });
        }

        let check = |vertex: VertexId| {
            if (vertex as usize) < num_vertices {
                Ok(vertex)
            } else {
                Err(AutomatonError::VertexOutOfRange {
                    vertex,
                    num_vertices,
                })
            }
        };

        let edges = edges
            .into_iter()
            .map(|edge| -> Result<Transition, AutomatonError> {
                Ok((check(edge.from)?, label_of(edge.label)?, check(edge.to)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let terminals = terminals
            .into_iter()
            .map(check)
            .collect::<Result<VertexSet, _>>()?;

        tracing::debug!(
            num_vertices,
            num_edges = edges.len(),
            num_terminals = terminals.len(),
            "built automaton"
        );

        Ok(Self::from_parts(num_vertices, edges, terminals, 0))
    }

    /// Assemble an automaton from already validated parts and index its edges.
    pub(crate) fn from_parts(
        num_vertices: usize,
        edges: Vec<Transition>,
        terminals: VertexSet,
        init_vertex: VertexId,
    ) -> Self {
        let slot = |from: VertexId, label: Label| from as usize * NUM_LABELS + label as usize;

        // Bounded by `build`, which rejects counts above MAX_VERTICES
        let num_slots = num_vertices
            .checked_mul(NUM_LABELS)
            .and_then(|slots| slots.checked_add(1))
            .unwrap_or_else(|| panic!("transition index for {num_vertices} vertices overflows"));

        // Counting sort of the edges by slot; stable, so insertion order survives
        let mut offsets = vec![0usize; num_slots];
        for &(from, label, _) in &edges {
            offsets[slot(from, label) + 1] += 1;
        }
        let mut total = 0;
        for offset in offsets.iter_mut() {
            total += *offset;
            *offset = total;
        }
        let mut cursor = offsets.clone();
        let mut targets = vec![0; edges.len()];
        for &(from, label, to) in &edges {
            let next = &mut cursor[slot(from, label)];
            targets[*next] = to;
            *next += 1;
        }

        Self {
            num_vertices,
            init_vertex,
            terminals,
            edges,
            offsets,
            targets,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn init_vertex(&self) -> VertexId {
        self.init_vertex
    }

    pub fn is_terminal(&self, vertex: VertexId) -> bool {
        self.terminals.contains(vertex)
    }

    pub fn terminals(&self) -> &VertexSet {
        &self.terminals
    }

    /// All edges, in the order they were supplied.
    pub fn edges(&self) -> &[Transition] {
        &self.edges
    }

    /// Vertices reachable from `vertex` by one edge carrying exactly `label`.
    ///
    /// # Panics
    /// Panics if `vertex` is not a vertex of this automaton.
    #[inline]
    pub fn transitions(&self, vertex: VertexId, label: Label) -> &[VertexId] {
        let slot = vertex as usize * NUM_LABELS + label as usize;
        &self.targets[self.offsets[slot]..self.offsets[slot + 1]]
    }

    /// Compute the set of vertices reachable from `vertices` through epsilon edges only.
    pub fn epsilon_closure(&self, vertices: &VertexSet) -> VertexSet {
        let mut closure = VertexSet::with_capacity(self.num_vertices);
        let mut stack: Vec<VertexId> = vertices.iter().collect();

        while let Some(vertex) = stack.pop() {
            if !closure.insert(vertex) {
                continue;
            }
            for &next in self.transitions(vertex, EPSILON) {
                if !closure.contains(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// Check if the whole of `word` is accepted from the initial vertex.
    ///
    /// Characters outside `a..=z` never match an edge, so words containing them
    /// are rejected.
    pub fn accepts(&self, word: &str) -> bool {
        let start = VertexSet::from_iter([self.init_vertex]);
        let mut current = self.epsilon_closure(&start);

        for byte in word.bytes() {
            let Some(letter) = letter_of_byte(byte) else {
                return false;
            };
            let mut reached = VertexSet::with_capacity(self.num_vertices);
            for vertex in current.iter() {
                for &next in self.transitions(vertex, letter) {
                    reached.insert(next);
                }
            }
            if reached.is_empty() {
                return false;
            }
            current = self.epsilon_closure(&reached);
        }

        current.intersects(&self.terminals)
    }

    /// Convert to a map representation for debugging.
    pub fn to_transition_map(&self) -> IndexMap<VertexId, IndexMap<char, Vec<VertexId>>> {
        let mut map: IndexMap<VertexId, IndexMap<char, Vec<VertexId>>> = IndexMap::new();

        for &(from, label, to) in &self.edges {
            map.entry(from)
                .or_default()
                .entry(label_char(label))
                .or_default()
                .push(to);
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_plus() -> Automaton {
        // 0 -a-> 1, 1 -b-> 1, 1 final
        Automaton::build(2, [Edge::new(0, 'a', 1), Edge::new(1, 'b', 1)], [1]).unwrap()
    }

    #[test]
    fn test_build_basic() {
        let automaton = ab_plus();

        assert_eq!(automaton.num_vertices(), 2);
        assert_eq!(automaton.init_vertex(), 0);
        assert!(automaton.is_terminal(1));
        assert!(!automaton.is_terminal(0));
        assert_eq!(automaton.transitions(0, 0), &[1]);
        assert_eq!(automaton.transitions(1, 1), &[1]);
        assert!(automaton.transitions(0, 1).is_empty());
        assert!(automaton.transitions(0, EPSILON).is_empty());
    }

    #[test]
    fn test_transitions_keep_insertion_order() {
        let automaton = Automaton::build(
            4,
            [
                Edge::new(0, 'x', 3),
                Edge::new(0, '$', 2),
                Edge::new(0, 'x', 1),
            ],
            [],
        )
        .unwrap();

        assert_eq!(automaton.transitions(0, label_of('x').unwrap()), &[3, 1]);
        assert_eq!(automaton.transitions(0, EPSILON), &[2]);
    }

    #[test]
    fn test_build_rejects_invalid_labels() {
        let result = Automaton::build(2, [Edge::new(0, 'A', 1)], [1]);
        assert_eq!(result.unwrap_err(), AutomatonError::InvalidLabel { label: 'A' });

        let result = Automaton::build(2, [Edge::new(0, 'a', 1), Edge::new(1, '7', 0)], [1]);
        assert_eq!(result.unwrap_err(), AutomatonError::InvalidLabel { label: '7' });
    }

    #[test]
    fn test_build_rejects_out_of_range_vertices() {
        let result = Automaton::build(2, [Edge::new(0, 'a', 2)], []);
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::VertexOutOfRange {
                vertex: 2,
                num_vertices: 2
            }
        );

        let result = Automaton::build(2, [], [5]);
        assert!(matches!(
            result,
            Err(AutomatonError::VertexOutOfRange { vertex: 5, .. })
        ));

        assert_eq!(Automaton::build(0, [], []).unwrap_err(), AutomatonError::Empty);
    }

    #[test]
    fn test_build_rejects_too_many_vertices() {
        // Would overflow the transition index size
        let num_vertices = usize::MAX / NUM_LABELS + 2;
        let result = Automaton::build(num_vertices, [Edge::new(0, 'a', 0)], [0]);
        assert_eq!(
            result.unwrap_err(),
            AutomatonError::TooManyVertices {
                num_vertices,
                max: MAX_VERTICES
            }
        );

        // Would truncate vertex ids
        let result = Automaton::build(MAX_VERTICES + 1, [], []);
        assert!(matches!(
            result,
            Err(AutomatonError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_epsilon_closure() {
        // 0 -ε-> 1 -ε-> 2, 2 -a-> 3
        let automaton = Automaton::build(
            4,
            [
                Edge::new(0, '$', 1),
                Edge::new(1, '$', 2),
                Edge::new(2, 'a', 3),
            ],
            [3],
        )
        .unwrap();

        let closure = automaton.epsilon_closure(&VertexSet::from_iter([0]));
        assert_eq!(closure.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        let closure = automaton.epsilon_closure(&VertexSet::from_iter([3]));
        assert_eq!(closure.len(), 1);
    }

    #[test]
    fn test_accepts() {
        let automaton = ab_plus();

        assert!(automaton.accepts("ab"));
        assert!(automaton.accepts("abbbb"));
        assert!(automaton.accepts("a"));
        assert!(!automaton.accepts(""));
        assert!(!automaton.accepts("ba"));
        assert!(!automaton.accepts("aB"));
    }

    #[test]
    fn test_accepts_through_epsilon_cycle() {
        // 0 <-ε-> 1, 1 -c-> 2 final
        let automaton = Automaton::build(
            3,
            [
                Edge::new(0, '$', 1),
                Edge::new(1, '$', 0),
                Edge::new(1, 'c', 2),
            ],
            [2],
        )
        .unwrap();

        assert!(automaton.accepts("c"));
        assert!(!automaton.accepts("cc"));
    }

    #[test]
    fn test_transition_map() {
        let map = ab_plus().to_transition_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map[&0][&'a'], vec![1]);
        assert_eq!(map[&1][&'b'], vec![1]);
    }
}
