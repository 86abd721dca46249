//! # Reading and writing of networks
//!
//! A network file starts with the number of vertices, followed by zero or more arcs. Every arc is
//! four integers: tail, head, capacity and cost per unit. Tokens are separated by any whitespace,
//! so an arc may be spread over lines, or a line may hold several arcs.
//!
//! ```text
//! 4
//! 0 1 2 1
//! 0 2 1 2
//! 1 3 1 1
//! 2 3 1 1
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::network::residual::Graph;
use crate::data::number_types::traits::Integer;
use crate::io::error::{FileLocation, Import, Parse};

pub mod error;
pub mod report;

/// Largest vertex count accepted from a file.
///
/// The network holds three matrices with a value for every pair of vertices, so memory grows with
/// the square of this number.
pub const MAX_VERTEX_COUNT: usize = 1 << 12;

/// Import a network from a file.
///
/// # Errors
///
/// When the file cannot be read, is not syntactically correct, or contains an arc that can't be
/// added to the network. No network is returned in that case, not even a partial one.
pub fn import<T: Integer>(file_path: &Path) -> Result<Graph<T>, Import> {
    let mut program = String::new();
    File::open(file_path)?
        .read_to_string(&mut program)?;

    parse(&program)
}

/// A token together with the line on which it appears.
type Token<'a> = (FileLocation<'a>, &'a str);

fn into_tokens(program: &str) -> impl Iterator<Item = Token<'_>> {
    program.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.split_whitespace().map(move |token| (((index + 1) as u64, line), token))
        })
}

fn parse_token<V>(
    (location, text): Token,
    what: &str,
    parse: impl FnOnce(&str) -> Option<V>,
) -> Result<V, Parse> {
    parse(text).ok_or_else(|| Parse::with_file_location(format!("Invalid {}: \"{}\"", what, text), location))
}

fn parse_vertex(text: &str) -> Option<usize> {
    text.parse().ok()
}

/// Parse a network, in string form.
///
/// # Arguments
///
/// * `program`: The vertex count followed by quadruples `tail head capacity cost`.
///
/// # Errors
///
/// A `Parse` error if the vertex count is missing, not a nonnegative integer or larger than
/// [`MAX_VERTEX_COUNT`], if any other token
/// is not an integer of the right kind, or if the input ends in the middle of an arc. An `Edge`
/// error if a vertex is out of range or a capacity is negative.
pub fn parse<T: Integer>(program: &str) -> Result<Graph<T>, Import> {
    let mut tokens = into_tokens(program);

    let count_token = tokens.next().ok_or_else(|| Parse::new("The vertex count is missing"))?;
    let vertex_count = parse_token(count_token, "vertex count", parse_vertex)?;
    if vertex_count > MAX_VERTEX_COUNT {
        let (location, _) = count_token;
        return Err(Parse::with_file_location(
            format!("The vertex count {} exceeds the maximum of {}", vertex_count, MAX_VERTEX_COUNT),
            location,
        ).into());
    }
    let mut graph = Graph::new(vertex_count);

    while let Some(first) = tokens.next() {
        let (location, _) = first;
        let mut next = |what: &str| tokens.next().ok_or_else(|| Parse::with_file_location(
            format!("Input ends before the {} of the arc starting on this line", what),
            location,
        ));

        let from = parse_token(first, "tail vertex", parse_vertex)?;
        let to = parse_token(next("head vertex")?, "head vertex", parse_vertex)?;
        let capacity = parse_token(next("capacity")?, "capacity", T::parse_decimal)?;
        let cost = parse_token(next("cost")?, "cost", T::parse_decimal)?;

        let (line, _) = location;
        graph.add_edge(from, to, capacity, cost)
            .map_err(|edge| Import::Edge { line, edge })?;
    }

    Ok(graph)
}
