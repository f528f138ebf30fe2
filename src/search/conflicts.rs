use crate::color::{Color, Graph, VertexId};

/**
Maintains, for a coloring, the number of neighbors of each vertex sharing its color
and the sum of these numbers (each conflicting edge is counted from both endpoints).

invariant: total == ∑ vertex_conflicts[v] == 2 * (nb conflicting edges)
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictTracker {
    /// vertex_conflicts[v]: number of neighbors of v having the same color as v
    vertex_conflicts: Vec<usize>,
    /// sum of vertex_conflicts
    total: usize,
}

impl ConflictTracker {
    /** counts for every vertex its same-colored neighbors. */
    pub fn new(graph:&Graph, colors:&[Color]) -> Self {
        let mut vertex_conflicts = vec![0 ; graph.nb_vertices()];
        let mut total = 0;
        for u in graph.vertices() {
            let nb = graph.neighbors(u).iter()
                .filter(|v| colors[**v] == colors[u])
                .count();
            vertex_conflicts[u] = nb;
            total += nb;
        }
        Self { vertex_conflicts, total }
    }

    /// number of neighbors of v sharing its color
    pub fn conflicts(&self, v:VertexId) -> usize { self.vertex_conflicts[v] }

    /// sum of the conflicts over all vertices
    pub fn total(&self) -> usize { self.total }

    /// per-vertex conflicts
    pub fn vertex_conflicts(&self) -> &[usize] { &self.vertex_conflicts }

    /// changes the color of v to new_color and updates the counters of v and its neighbors.
    /// colors[v] is written by this method, after the counters are updated.
    pub fn apply_recolor(&mut self, graph:&Graph, colors:&mut [Color], v:VertexId, new_color:Color) {
        let previous_color = colors[v];
        if previous_color == new_color { return; }
        for &u in graph.neighbors(v) {
            if colors[u] == previous_color { // remove conflict
                debug_assert!(self.vertex_conflicts[u] > 0 && self.vertex_conflicts[v] > 0);
                self.vertex_conflicts[u] -= 1;
                self.vertex_conflicts[v] -= 1;
                self.total -= 2;
            } else if colors[u] == new_color { // add conflict
                self.vertex_conflicts[u] += 1;
                self.vertex_conflicts[v] += 1;
                self.total += 2;
            }
        }
        colors[v] = new_color;
    }
}
