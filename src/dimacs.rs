use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{digit1, multispace0, space1};
use nom::combinator::map_res;
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::color::VertexId;
use crate::error::InstanceError;
use crate::map_instance::MapInstance;


/// reads a DIMACS file as a map. Vertex i (DIMACS numbering) is called "i"
pub fn from_file(filename:&str) -> Result<MapInstance, InstanceError> {
    let content = fs::read_to_string(filename)
        .map_err(|source| InstanceError::Io { filename: filename.to_string(), source })?;
    from_str(&content)
}

/// reads a DIMACS string as a map
pub fn from_str(content:&str) -> Result<MapInstance, InstanceError> {
    let (n, _, adj_list) = read_from_str(content)?;
    let names = (1..=n).map(|i| i.to_string()).collect();
    Ok(MapInstance::new(names, adj_list))
}

/// reads an instance from a string, returns (n,m,adj_list)
pub fn read_from_str(content:&str) -> Result<(usize, usize, Vec<Vec<VertexId>>), InstanceError> {
    let s1 = content.replace("\r", "");
    let s2 = skip_comments(s1.as_str())
        .map_err(|e| InstanceError::Parse(format!("{}", e)))?.0;
    let (mut s3,(n,m)) = read_header(s2)
        .map_err(|e| InstanceError::Parse(format!("invalid header: {}", e)))?;
    let mut adj_list:Vec<Vec<VertexId>> = vec![Vec::new();n];
    let mut nb_edges = 0;
    loop {
        if let Ok((tmp,_)) = skip_comments(s3) { s3 = tmp; }
        let (tmp,(a,b)) = match read_edge(s3) {
            Ok(res) => res,
            Err(_) => break,
        };
        s3 = tmp;
        if let Some(v) = [a,b].iter().find(|v| **v == 0 || **v > n) {
            return Err(InstanceError::VertexOutOfRange { vertex: *v, n });
        }
        nb_edges += 1;
        // some files list both directions
        if a != b && !adj_list[a-1].contains(&(b-1)) {
            adj_list[a-1].push(b-1);
            adj_list[b-1].push(a-1);
        }
    }
    if !s3.trim().is_empty() {
        let line = s3.lines().next().unwrap_or_default();
        return Err(InstanceError::Parse(format!("unexpected line: {}", line)));
    }
    if nb_edges != m && 2*nb_edges != m {
        return Err(InstanceError::EdgeCount { expected: m, found: nb_edges });
    }
    Ok((n, m, adj_list))
}

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), terminated(take_until("\n"), tag("\n")))(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces (and the blanks that follow)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(separated_pair(read_integer, space1, read_integer), multispace0)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), read_two_integers)(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::ColoringInstance;

    #[test]
    fn test_read_instance() {
        let inst = from_file("insts/canada.col").unwrap();
        assert_eq!(inst.nb_vertices(), 13);
        assert_eq!(inst.edges().len(), 17);
        assert!(inst.is_symmetric());
    }

    #[test]
    fn test_read_comments() {
        let s = "c this is a test comment\nc another one\np edge 2 1\ne 1 2";
        assert_eq!(
            skip_comments(s),
            Ok((
                "p edge 2 1\ne 1 2",
                vec![" this is a test comment", " another one"]
            ))
        );
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s), Ok(("e 1 2", (2,1))));
        let s = "p col 2 1\ne 1 2";
        assert_eq!(read_header(s), Ok(("e 1 2", (2,1))));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s), Ok(("", (1,2))));
    }

    #[test]
    fn test_edges_on_one_line() {
        let (n,m,adj_list) = read_from_str("p edge 3 2\ne 1 2 e 2 3\n").unwrap();
        assert_eq!((n,m), (3,2));
        assert_eq!(adj_list, vec![vec![1], vec![0,2], vec![1]]);
    }

    #[test]
    fn test_both_directions_listed() {
        let inst = from_str("p edge 2 2\ne 1 2\ne 2 1\n").unwrap();
        assert_eq!(inst.neighbors(0), &[1]);
        assert_eq!(inst.name(1), "2");
    }

    #[test]
    fn test_invalid_instances() {
        assert!(matches!(read_from_str("e 1 2\n"), Err(InstanceError::Parse(_))));
        assert!(matches!(
            read_from_str("p edge 2 1\ne 1 3\n"),
            Err(InstanceError::VertexOutOfRange { vertex: 3, n: 2 })
        ));
        assert!(matches!(
            read_from_str("p edge 3 3\ne 1 2\n"),
            Err(InstanceError::EdgeCount { expected: 3, found: 1 })
        ));
        assert!(matches!(read_from_str("p edge 2 1\ne 1 2\nx\n"), Err(InstanceError::Parse(_))));
    }
}
