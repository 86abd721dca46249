//! # A minimum cost maximum flow solver
//!
//! Flow is sent from a source to a sink along successive cheapest augmenting paths, as described
//! in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//! Cheapest paths are found with a label correcting (Bellman-Ford) search, because the reverse arcs
//! of the residual network have negative costs.
//!
//! ```
//! use remcf::algorithm::SolveMinCostMaxFlow;
//! use remcf::data::network::residual::Graph;
//!
//! let mut graph = Graph::<i64>::new(4);
//! graph.add_edge(0, 1, 2, 1).unwrap();
//! graph.add_edge(0, 2, 1, 2).unwrap();
//! graph.add_edge(1, 3, 1, 1).unwrap();
//! graph.add_edge(2, 3, 1, 1).unwrap();
//!
//! let result = graph.solve().unwrap();
//! assert_eq!(result.total_flow, 2);
//! assert_eq!(result.total_cost, 5);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
