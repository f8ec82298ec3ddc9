//! Vertex adjacency for triangle meshes

use std::collections::BTreeSet;

/// Per-vertex neighbor lists built from a triangle list
///
/// Each list is deduplicated and sorted ascending, so two triangles sharing an
/// edge contribute one link and neighbor sums always run in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAdjacency {
    neighbors: Vec<Vec<usize>>,
}

impl VertexAdjacency {
    /// Build adjacency for `vertex_count` vertices from validated triangles
    pub fn build(vertex_count: usize, triangles: &[[usize; 3]]) -> Self {
        let mut sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); vertex_count];

        for tri in triangles {
            for i in 0..3 {
                let (a, b) = (tri[i], tri[(i + 1) % 3]);
                sets[a].insert(b);
                sets[b].insert(a);
            }
        }

        Self {
            neighbors: sets.into_iter().map(|s| s.into_iter().collect()).collect(),
        }
    }

    /// Neighbors of vertex `idx`, sorted ascending
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    /// Whether vertex `idx` has no incident edge
    pub fn is_isolated(&self, idx: usize) -> bool {
        self.neighbors[idx].is_empty()
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the mesh had no vertices
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of distinct undirected edges
    pub fn num_edges(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
