use crate::error::{MotifError, Result};
use crate::subgraph::{HostEdge, HostGraph};
use nom::{
    character::complete::{digit1, i64 as parse_i64, space0, space1},
    combinator::{all_consuming, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use std::io::Read;
use std::path::Path;

/// Parsed motif-counting input: motif size plus host graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInput {
    pub k: usize,
    pub host: HostGraph,
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a line holding only a size, surrounding blanks allowed
fn size_line(input: &str) -> IResult<&str, usize> {
    all_consuming(delimited(space0, parse_usize, space0))(input)
}

/// Parse a line holding exactly two integers: `source target`
fn edge_line(input: &str) -> IResult<&str, HostEdge> {
    all_consuming(delimited(
        space0,
        separated_pair(parse_i64, space1, parse_i64),
        space0,
    ))(input)
}

/// Parse a size given on the command line or an interactive prompt
pub fn parse_size(input: &str) -> Result<usize> {
    let line = input.trim_end_matches(['\r', '\n']);
    match size_line(line) {
        Ok((_, n)) => Ok(n),
        Err(_) => Err(MotifError::invalid_input(
            1,
            format!("expected a non-negative integer, got {:?}", line),
        )),
    }
}

/// Parse the motif size header followed by one edge per line.
///
/// Blank lines are skipped; any other line that is not exactly two
/// integers is rejected with its 1-based line number.
pub fn parse_host_input(content: &str) -> Result<HostInput> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| MotifError::invalid_input(1, "missing motif size"))?;
    let k = match size_line(header) {
        Ok((_, k)) => k,
        Err(_) => {
            return Err(MotifError::invalid_input(
                header_no,
                format!("expected motif size, got {:?}", header),
            ))
        }
    };

    let mut edges = Vec::new();
    for (line_no, line) in lines {
        match edge_line(line) {
            Ok((_, edge)) => edges.push(edge),
            Err(_) => {
                return Err(MotifError::invalid_input(
                    line_no,
                    format!("expected two integers, got {:?}", line),
                ))
            }
        }
    }

    Ok(HostInput {
        k,
        host: HostGraph::from_edges(edges),
    })
}

/// Read and parse a whole input stream
pub fn read_host_input<R: Read>(mut reader: R) -> Result<HostInput> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_host_input(&content)
}

/// Parse an input file containing the motif size and host edges
pub fn parse_input_file(path: &Path) -> Result<HostInput> {
    let content = std::fs::read_to_string(path)?;
    parse_host_input(&content)
}
