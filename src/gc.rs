/*
Implements:
 - reading graphs in the plain edge-list format:
     <node_count> <edge_count>
     <u_1> <v_1>
     ...
 - reading initial colorings (exchange format produced by the greedy/ILP solvers):
     <color_count>
     <color_of_node_0> <color_of_node_1> ...
 - writing solutions:
     <color_count> 0
     <color_of_node_0> <color_of_node_1> ...
*/
use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{digit1, line_ending, multispace0, multispace1, not_line_ending, space0, space1};
use nom::combinator::{eof, map_res};
use nom::multi::separated_list0;
use nom::sequence::{preceded, separated_pair, terminated, tuple};

use crate::color::{Color, Graph, VertexId};
use crate::error::{ColorError, Result};


/** coloring given as a starting point to the search */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialColoring {
    /// declared number of colors
    pub nb_colors: usize,
    /// colors[v]: color of vertex v
    pub colors: Vec<Color>,
}

impl InitialColoring {
    /** checks that the coloring assigns a color in [0, nb_colors) to each vertex of the graph */
    pub fn validate(&self, graph:&Graph) -> Result<()> {
        if self.colors.len() != graph.nb_vertices() {
            return Err(ColorError::MalformedInput(format!(
                "initial coloring has {} entries, the graph has {} vertices",
                self.colors.len(), graph.nb_vertices()
            )));
        }
        if let Some((v,c)) = self.colors.iter().enumerate().find(|(_,c)| **c >= self.nb_colors) {
            return Err(ColorError::MalformedInput(format!(
                "vertex {} has color {} (declared color count: {})", v, c, self.nb_colors
            )));
        }
        Ok(())
    }
}


/// reads an unsigned integer
pub(crate) fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, followed by the end of the line
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        preceded(space0, separated_pair(read_usize, space1, read_usize)),
        tuple((space0, alt((line_ending, eof))))
    )(s)
}

/// converts a nom error into a crate error
pub(crate) fn malformed(context:&str, e:nom::Err<nom::error::Error<&str>>) -> ColorError {
    let detail = match e {
        nom::Err::Incomplete(_) => "incomplete input".to_string(),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let line:String = e.input.chars().take_while(|c| *c != '\n').take(40).collect();
            format!("{:?} near '{}'", e.code, line)
        }
    };
    ColorError::MalformedInput(format!("{}: {}", context, detail))
}

/** parses a graph in the plain edge-list format.

# Errors
 - if the header or an edge line cannot be parsed
 - if the number of edge lines differs from the declared edge count
 - if an edge references a vertex outside [0, node_count)
 - if a vertex of [0, node_count) appears in no edge
*/
pub fn parse_graph(input:&str) -> Result<Graph> {
    let s = input.replace("\r", "");
    let (mut remaining, (n,m)) = preceded(multispace0, read_two_integers)(s.as_str())
        .map_err(|e| malformed("unable to read the header", e))?;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::with_capacity(m);
    for i in 0..m {
        let (tmp, e) = read_two_integers(remaining)
            .map_err(|e| malformed(&format!("unable to read edge {} (expected {} edges)", i, m), e))?;
        remaining = tmp;
        edges.push(e);
    }
    if !remaining.trim().is_empty() {
        return Err(ColorError::MalformedInput(format!(
            "more data than the {} declared edges", m
        )));
    }
    let graph = Graph::from_edges(n, &edges)?;
    if let Some(v) = graph.first_isolated_vertex() {
        return Err(ColorError::MalformedInput(format!(
            "vertex {} appears in no edge (the edges must cover [0,{}))", v, n
        )));
    }
    Ok(graph)
}

/// reads a graph in the plain edge-list format from a file
pub fn read_graph_file(filename:&str) -> Result<Graph> {
    parse_graph(&fs::read_to_string(filename)?)
}

/** parses a coloring in the exchange format. Additional values on the first line
(for instance the reserved field of a solution file) are ignored.
*/
pub fn parse_coloring(input:&str) -> Result<InitialColoring> {
    let s = input.replace("\r", "");
    let (remaining, nb_colors) = terminated(
        preceded(multispace0, read_usize),
        not_line_ending
    )(s.as_str()).map_err(|e| malformed("unable to read the color count", e))?;
    let (remaining, colors) = preceded(multispace0, separated_list0(multispace1, read_usize))(remaining)
        .map_err(|e| malformed("unable to read the colors", e))?;
    if !remaining.trim().is_empty() {
        return Err(ColorError::MalformedInput(
            "unexpected content after the colors".to_string()
        ));
    }
    Ok(InitialColoring { nb_colors, colors })
}

/// reads a coloring in the exchange format from a file
pub fn read_coloring_file(filename:&str) -> Result<InitialColoring> {
    parse_coloring(&fs::read_to_string(filename)?)
}

fn join_colors(colors:&[Color]) -> String {
    colors.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(" ")
}

/** writes a coloring in the exchange format (input of the tabu search) */
pub fn coloring_to_string(nb_colors:usize, colors:&[Color]) -> String {
    format!("{}\n{}\n", nb_colors, join_colors(colors))
}

/** writes a string encoding the solution. The second value of the first line
is reserved (optimality proof) and always 0.
*/
pub fn solution_to_string(nb_colors:usize, colors:&[Color]) -> String {
    format!("{} 0\n{}\n", nb_colors, join_colors(colors))
}

/** writes a solution into a file. */
pub fn write_solution(filename:&str, nb_colors:usize, colors:&[Color]) -> Result<()> {
    fs::write(filename, solution_to_string(nb_colors, colors))?;
    Ok(())
}
