use std::ops::Range;

use bit_set::BitSet;

use crate::error::{ColorError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Color of a vertex (dense, 0-indexed) */
pub type Color = usize;

/** models a Graph Coloring instance.

The adjacency lists are built once from the edge list and never modified.
Duplicated edges are kept: a vertex appears as many times in the adjacency list
of its neighbor as the edge appears in the input.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph (as given in the input)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
}


impl Graph {

    /// builds a graph with n vertices from an edge list.
    /// Vertices that appear in no edge are kept (isolated).
    ///
    /// # Errors
    /// - if an endpoint is not in [0, n)
    /// - if an edge is a self-loop (such a graph cannot be colored)
    ///
    /// ```
    /// use tabu_color::color::Graph;
    ///
    /// let g = Graph::from_edges(3, &[(0,1),(1,2)]).unwrap();
    /// assert_eq!(g.neighbors(1), &[0,2]);
    /// assert!(Graph::from_edges(2, &[(0,0)]).is_err());
    /// ```
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut adj_list = vec![Vec::new() ; n];
        for (i,&(u,v)) in edges.iter().enumerate() {
            if u >= n || v >= n {
                return Err(ColorError::MalformedInput(format!(
                    "edge {} ({},{}) references a vertex outside [0,{})", i, u, v, n
                )));
            }
            if u == v {
                return Err(ColorError::MalformedInput(format!(
                    "edge {} is a self-loop on vertex {}", i, u
                )));
            }
            adj_list[u].push(v);
            adj_list[v].push(u);
        }
        Ok(Self { n, edges:edges.to_vec(), adj_list })
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges (duplicates included)
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// vertex ids
    pub fn vertices(&self) -> Range<VertexId> { 0..self.n }

    /// list of vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of u (duplicates included)
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// logs statistics of the instance
    pub fn display_statistics(&self) {
        let min_degree = self.vertices().map(|i| self.degree(i)).min().unwrap_or(0);
        let max_degree = self.vertices().map(|i| self.degree(i)).max().unwrap_or(0);
        tracing::info!(
            nb_vertices = self.nb_vertices(), nb_edges = self.nb_edges(), min_degree, max_degree,
            "instance statistics"
        );
    }

    /// first vertex that appears in no edge, if any
    pub fn first_isolated_vertex(&self) -> Option<VertexId> {
        self.vertices().find(|v| self.adj_list[*v].is_empty())
    }

    /** writes the graph in the DIMACS format (vertices are 1-indexed) */
    pub fn to_dimacs_string(&self) -> String {
        let mut res = format!("p edges {} {}\n", self.nb_vertices(), self.nb_edges());
        for (u,v) in self.edges() {
            res += format!("e {} {}\n", u+1, v+1).as_str();
        }
        res
    }
}


/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is valid, contains the number of distinct colors used
    Ok(usize),
    /// the coloring does not assign a color to each vertex (expected, got)
    WrongLength(usize, usize),
    /// both endpoints of the edge share the same color
    Conflict(VertexId, VertexId),
}

/**
checks a coloring given as colors[v] for each vertex v.
Returns the number of distinct colors if the coloring is valid.
*/
pub fn checker(graph:&Graph, colors:&[Color]) -> CheckerResult {
    if colors.len() != graph.nb_vertices() {
        return CheckerResult::WrongLength(graph.nb_vertices(), colors.len());
    }
    for &(u,v) in graph.edges() {
        if colors[u] == colors[v] {
            return CheckerResult::Conflict(u, v);
        }
    }
    CheckerResult::Ok(nb_colors_used(colors))
}

/** number of edges whose endpoints share the same color (full scan, duplicates included) */
pub fn count_violating_edges(graph:&Graph, colors:&[Color]) -> usize {
    graph.edges().iter()
        .filter(|(u,v)| colors[*u] == colors[*v])
        .count()
}

/** number of distinct colors appearing in a coloring */
pub fn nb_colors_used(colors:&[Color]) -> usize {
    let mut seen = BitSet::new();
    for c in colors {
        seen.insert(*c);
    }
    seen.len()
}
