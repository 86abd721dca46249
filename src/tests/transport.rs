//! Transportation problem with two suppliers and two customers.
//!
//! Vertex 0 is an artificial source feeding the suppliers 1 and 2 with their supply, vertex 5 an
//! artificial sink collecting the demand of customers 3 and 4.
use crate::algorithm::Augmentation;
use crate::data::network::residual::Graph;

pub const LITERAL_STRING: &str = "6
0 1 3 0
0 2 2 0
1 3 2 4
1 4 3 6
2 3 2 5
2 4 2 3
3 5 3 0
4 5 2 0
";

pub fn graph() -> Graph<i64> {
    let mut graph = Graph::new(6);
    for (from, to, capacity, cost) in [
        (0, 1, 3, 0),
        (0, 2, 2, 0),
        (1, 3, 2, 4),
        (1, 4, 3, 6),
        (2, 3, 2, 5),
        (2, 4, 2, 3),
        (3, 5, 3, 0),
        (4, 5, 2, 0),
    ] {
        graph.add_edge(from, to, capacity, cost).unwrap();
    }
    graph
}

pub fn augmentations() -> Vec<Augmentation<i64>> {
    vec![
        Augmentation { path: vec![0, 2, 4, 5], bottleneck: 2, cost: 3 },
        Augmentation { path: vec![0, 1, 3, 5], bottleneck: 2, cost: 4 },
        // Sends flow back from customer 4 to supplier 2
        Augmentation { path: vec![0, 1, 4, 2, 3, 5], bottleneck: 1, cost: 8 },
    ]
}

pub const TOTAL_FLOW: i64 = 5;
pub const TOTAL_COST: i64 = 22;
