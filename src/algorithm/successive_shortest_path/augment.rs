//! # Augmenting along a path
//!
//! Pushing the largest possible amount of flow along the path found by the cheapest path search,
//! and updating the residual network accordingly.
use itertools::Itertools;

use crate::algorithm::{Augmentation, SolveError};
use crate::algorithm::successive_shortest_path::cheapest_path::PredecessorTree;
use crate::data::network::residual::Graph;
use crate::data::number_types::traits::Integer;

/// Reconstruct the path from the source to the sink.
///
/// # Errors
///
/// If a vertex without predecessor is reached, or if the source is not reached within
/// `vertex_count` steps. Neither happens for a tree produced by a search in a residual network
/// without negative cycles.
pub fn trace_back(predecessors: &[Option<usize>], source: usize, sink: usize) -> Result<Vec<usize>, SolveError> {
    let mut path = vec![sink];
    let mut current = sink;

    while current != source {
        let steps = path.len() - 1;
        let next = match predecessors[current] {
            Some(next) if steps < predecessors.len() => next,
            _ => return Err(SolveError::InternalInvariantViolation { sink, reached: current, steps }),
        };

        path.push(next);
        current = next;
    }

    path.reverse();
    Ok(path)
}

/// Push flow along the cheapest path.
///
/// The amount pushed is the bottleneck: the smallest residual capacity on the path. Every arc on
/// the path loses that much residual capacity, and its reverse gains it. The total flow of the
/// network grows by the same amount.
///
/// The network is only modified when no error is returned.
///
/// # Arguments
///
/// * `graph`: Network in which `tree` was computed.
/// * `tree`: Result of a successful search.
/// * `source`: Vertex the search started from.
/// * `sink`: Vertex the search reached.
///
/// # Return value
///
/// The path, the amount of flow pushed and the cost of a unit of flow along the path.
pub fn augment<T: Integer>(
    graph: &mut Graph<T>,
    tree: &PredecessorTree<T>,
    source: usize,
    sink: usize,
) -> Result<Augmentation<T>, SolveError> {
    let path = trace_back(&tree.predecessors, source, sink)?;

    let bottleneck = path.iter().tuple_windows()
        .map(|(&from, &to)| graph.residual_capacity(from, to))
        .min()
        .ok_or(SolveError::InternalInvariantViolation { sink, reached: sink, steps: 0 })?;
    debug_assert!(bottleneck.is_positive());

    // Check everything that can overflow before changing anything
    let cost = path.iter().tuple_windows()
        .try_fold(T::zero(), |total, (&from, &to)| total.checked_add(&graph.edge_cost(from, to)))
        .ok_or(SolveError::Overflow("computing the cost of a path"))?;
    let total_flow = graph.total_flow().checked_add(&bottleneck)
        .ok_or(SolveError::Overflow("accumulating the total flow"))?;
    if path.iter().tuple_windows().any(|(&from, &to)| graph.residual_capacity(to, from).checked_add(&bottleneck).is_none()) {
        return Err(SolveError::Overflow("increasing a reverse residual capacity"));
    }

    let residual = graph.residual_mut();
    for (&from, &to) in path.iter().tuple_windows() {
        residual[(from, to)] = residual[(from, to)] - bottleneck;
        residual[(to, from)] = residual[(to, from)] + bottleneck;
    }
    *graph.total_flow_mut() = total_flow;

    Ok(Augmentation { path, bottleneck, cost })
}
