//! # Networks shared by tests throughout the crate.
//!
//! Convention for names:
//!
//! * `const LITERAL_STRING`: the network in the file format
//! * `fn graph()`: the network as it is after importing
//! * `fn augmentations()`: the augmenting paths, in order
use num_traits::NumCast;

use crate::data::network::residual::Graph;
use crate::data::number_types::traits::Integer;

pub mod transport;

/// Two disjoint paths; the cheaper one is used first.
///
/// ```text
///       1
///  (2,1) \ (1,1)
///  0      3
///  (1,2) / (1,1)
///       2
/// ```
pub fn diamond<T: Integer>() -> Graph<T> {
    let value = |v: i8| <T as NumCast>::from(v).unwrap();

    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, value(2), value(1)).unwrap();
    graph.add_edge(0, 2, value(1), value(2)).unwrap();
    graph.add_edge(1, 3, value(1), value(1)).unwrap();
    graph.add_edge(2, 3, value(1), value(1)).unwrap();
    graph
}
