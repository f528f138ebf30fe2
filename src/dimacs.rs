use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{multispace0, not_line_ending, space1};
use nom::multi::many0;
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};

use crate::color::{Graph, VertexId};
use crate::error::{ColorError, Result};
use crate::gc::{malformed, read_usize};


/// reads a graph from a DIMACS file
pub fn read_dimacs_file(filename:&str) -> Result<Graph> {
    parse_dimacs(&fs::read_to_string(filename)?)
}

/** parses a DIMACS instance (WARNING: indices start at 1 in the DIMACS format,
they are shifted to start at 0).

Some DIMACS files list each edge in both directions and declare twice the number of edges,
both conventions are accepted.
*/
pub fn parse_dimacs(input:&str) -> Result<Graph> {
    let s1 = input.replace("\r","");
    let s2 = skip_comments(s1.as_str())
        .map_err(|e| malformed("unable to skip comments", e))?.0;
    let (mut s3,(n,m)) = read_header(s2)
        .map_err(|e| malformed("unable to read the DIMACS header", e))?;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::with_capacity(m);
    loop {
        s3 = skip_comments(s3).map_err(|e| malformed("unable to skip comments", e))?.0;
        if s3.is_empty() { break; }
        let (tmp,(a,b)) = read_edge(s3)
            .map_err(|e| malformed(&format!("unable to read edge {}", edges.len()+1), e))?;
        if a == 0 || b == 0 {
            return Err(ColorError::MalformedInput(format!(
                "edge {} uses vertex 0 (DIMACS vertices start at 1)", edges.len()+1
            )));
        }
        edges.push((a-1, b-1));
        s3 = tmp;
    }
    if edges.len() != m && 2*edges.len() != m {
        return Err(ColorError::MalformedInput(format!(
            "read {} edges, the header declares {}", edges.len(), m
        )));
    }
    Graph::from_edges(n, &edges)
}

/// skips a single comment (and the blanks following it)
fn skip_comment(s:&str) -> IResult<&str, &str> {
    terminated(preceded(tag("c"), not_line_ending), multispace0)(s)
}

/// skips blanks and all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    preceded(multispace0, many0(skip_comment))(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(separated_pair(read_usize, space1, read_usize), multispace0)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edges"), tag("edge"), tag("col"))), space1)),
        read_two_integers
    )(s)
}

/// reads edge line
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(pair(tag("e"), space1), read_two_integers)(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_comments() {
        let s = "c this is a test comment\nc another one\np edge 2 1\ne 1 2";
        assert_eq!(skip_comments(s).unwrap().0, "p edge 2 1\ne 1 2");
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "e 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().1, (2,1));
        assert_eq!(read_header("p edges 5 7\n").unwrap().1, (5,7));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s).unwrap().1, (1,2));
        assert_eq!(read_edge(s).unwrap().0, "");
    }

    #[test]
    fn test_parse_dimacs() {
        let g = parse_dimacs("c square\np edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 4 1\n").unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.nb_edges(), 4);
        assert_eq!(g.neighbors(0), &[1,3]);
    }

    #[test]
    fn test_parse_dimacs_edges_on_one_line() {
        let g = parse_dimacs("p edge 3 2\ne 1 2 e 2 3").unwrap();
        assert_eq!(g.nb_edges(), 2);
    }

    #[test]
    fn test_parse_dimacs_count_mismatch() {
        assert!(parse_dimacs("p edge 3 3\ne 1 2\n").is_err());
        assert!(parse_dimacs("p edge 3 1\ne 0 2\n").is_err());
    }

    #[test]
    fn test_dimacs_round_trip() {
        let g = Graph::from_edges(3, &[(0,1),(1,2),(0,2)]).unwrap();
        let back = parse_dimacs(&g.to_dimacs_string()).unwrap();
        assert_eq!(back.edges(), g.edges());
    }
}
