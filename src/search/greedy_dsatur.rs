use std::cmp::{Ordering, max, Ord};

use priority_queue::PriorityQueue;
use bit_set::BitSet;

use crate::color::{Color, Graph, VertexId};
use crate::gc::InitialColoring;

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm (Brélaz, 1979).
 1. choose an uncolored vertex that sees the most colors (break ties by the largest degree)
 2. give it the first color not used by its neighbors
 3. mark all its uncolored neighbors as seeing this color
 4. repeat until every vertex is colored

The coloring obtained is always valid. It can be used as the initial coloring of the tabu search.
*/
pub fn greedy_dsatur(graph:&Graph) -> InitialColoring {
    let n:usize = graph.nb_vertices();
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in graph.vertices() {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:graph.degree(i)});
    }
    let mut colors:Vec<Option<Color>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v] -> colors v sees
    let mut nb_colors:usize = 0;
    while let Some((current_vertex,_)) = remaining_vertices.pop() {
        // assign it a color
        let mut color:Color = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colors = max(nb_colors, color+1);
        // update saturation degree information
        for conflict_vertex in graph.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if adj_colors[*conflict_vertex].insert(color) {
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    InitialColoring {
        nb_colors,
        colors: colors.into_iter().map(|c| c.unwrap_or(0)).collect(),
    }
}
