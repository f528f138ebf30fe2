use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{Color, Graph, VertexId};
use crate::search::conflicts::ConflictTracker;
use crate::search::tabu::TabuList;


/**
Decision of changing the color of a vertex
*/
#[derive(Debug,Clone,Hash,Eq,PartialEq)]
pub struct Move {
    /// vertex to recolor
    pub vertex: VertexId,
    /// previously used color
    pub previous_color: Color,
    /// color to use
    pub next_color: Color,
}


/**
State of the local search for a fixed number of colors: the coloring, its conflict
counters and the tabu list. It is owned by a single feasibility search and every
move updates the three of them together.

One step:
 1. choose a non-tabu vertex with the maximum number of conflicts (ties broken at random)
 2. give it the color shared by the fewest of its neighbors (ties broken at random)
 3. make it tabu
*/
#[derive(Debug, Clone)]
pub struct SearchState<'a> {
    /// reference instance
    graph: &'a Graph,
    /// colors[v]: color of the vertex v
    colors: Vec<Color>,
    /// number of colors allowed
    nb_colors: usize,
    /// conflict counters of the current coloring
    conflicts: ConflictTracker,
    /// recently recolored vertices
    tabu: TabuList,
}

impl<'a> SearchState<'a> {
    /** creates a search state. colors must be in [0, nb_colors). */
    pub fn new(graph:&'a Graph, colors:Vec<Color>, nb_colors:usize, tabu_bound:usize) -> Self {
        debug_assert_eq!(colors.len(), graph.nb_vertices());
        debug_assert!(colors.iter().all(|c| *c < nb_colors));
        let conflicts = ConflictTracker::new(graph, &colors);
        Self { graph, colors, nb_colors, conflicts, tabu: TabuList::new(tabu_bound) }
    }

    /// current coloring
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// consumes the state and returns its coloring
    pub fn into_colors(self) -> Vec<Color> { self.colors }

    /// number of colors allowed
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// conflict counters
    pub fn conflicts(&self) -> &ConflictTracker { &self.conflicts }

    /// tabu list
    pub fn tabu(&self) -> &TabuList { &self.tabu }

    /// sum of the vertex conflicts (twice the number of conflicting edges)
    pub fn total_conflicts(&self) -> usize { self.conflicts.total() }

    /// non-tabu conflicting vertices with the maximum number of conflicts
    fn best_candidates(&self) -> Vec<VertexId> {
        let mut best = 0;
        let mut res = Vec::new();
        for v in self.graph.vertices() {
            let nb = self.conflicts.conflicts(v);
            if nb == 0 || self.tabu.contains(v) { continue; }
            if nb > best {
                best = nb;
                res.clear();
                res.push(v);
            } else if nb == best {
                res.push(v);
            }
        }
        res
    }

    /// selects the next vertex to recolor.
    ///
    /// If every conflicting vertex is tabu, the oldest tabu vertices are released one by one
    /// until one of them is conflicting (it is then the only candidate). If the tabu list
    /// becomes empty without finding one, a random released vertex is returned.
    /// Returns None if no vertex can be selected.
    pub fn select_vertex<R:Rng>(&mut self, rng:&mut R) -> Option<VertexId> {
        if let Some(v) = self.best_candidates().choose(rng) {
            return Some(*v);
        }
        let mut released = Vec::new();
        while let Some(v) = self.tabu.pop_oldest() {
            if self.conflicts.conflicts(v) > 0 {
                return Some(v);
            }
            released.push(v);
        }
        // only reachable when no vertex is conflicting
        released.choose(rng).copied()
    }

    /// selects the color (other than the current one) shared by the fewest neighbors of v.
    /// Returns None if there is no other color.
    pub fn select_color<R:Rng>(&self, v:VertexId, rng:&mut R) -> Option<Color> {
        let mut nb_neigh_colors = vec![0 ; self.nb_colors];
        for u in self.graph.neighbors(v) {
            nb_neigh_colors[self.colors[*u]] += 1;
        }
        let current_color = self.colors[v];
        let mut best = usize::MAX;
        let mut res = Vec::new();
        for (c,nb) in nb_neigh_colors.iter().enumerate() {
            if c == current_color { continue; }
            if *nb < best {
                best = *nb;
                res.clear();
                res.push(c);
            } else if *nb == best {
                res.push(c);
            }
        }
        res.choose(rng).copied()
    }

    /// performs one local search step. Returns the move applied, or None if no
    /// vertex or no color could be selected.
    pub fn step<R:Rng>(&mut self, rng:&mut R) -> Option<Move> {
        let vertex = self.select_vertex(rng)?;
        let next_color = self.select_color(vertex, rng)?;
        let previous_color = self.colors[vertex];
        self.tabu.push(vertex);
        self.conflicts.apply_recolor(self.graph, &mut self.colors, vertex, next_color);
        Some(Move { vertex, previous_color, next_color })
    }
}
