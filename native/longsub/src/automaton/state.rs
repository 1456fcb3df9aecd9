//! Vertex identifiers and vertex sets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A vertex identifier in `[0, num_vertices)`.
pub type VertexId = u32;

/// A set of vertices backed by a growable bit set.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexSet {
    bits: FixedBitSet,
}

impl VertexSet {
    /// Create an empty set sized for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Insert a vertex. Returns `true` if it was not present before.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        let idx = vertex as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Check if the set contains a vertex.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.bits.contains(vertex as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over the vertices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.bits.ones().map(|i| i as VertexId)
    }

    /// Check if this set shares at least one vertex with another.
    pub fn intersects(&self, other: &VertexSet) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<VertexId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let mut set = Self::default();
        for vertex in iter {
            set.insert(vertex);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_set_insert() {
        let mut set = VertexSet::with_capacity(4);
        assert!(set.is_empty());

        assert!(set.insert(2));
        assert!(!set.insert(2));
        // Grows past the initial capacity
        assert!(set.insert(9));
        assert_eq!(set.len(), 2);
        assert!(set.contains(9));
        assert!(!set.contains(3));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_vertex_set_intersects() {
        let left: VertexSet = [1, 3].into_iter().collect();
        let right: VertexSet = [3, 12].into_iter().collect();
        let other: VertexSet = [0, 2].into_iter().collect();

        assert!(left.intersects(&right));
        assert!(!left.intersects(&other));
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![3, 12]);
    }
}
