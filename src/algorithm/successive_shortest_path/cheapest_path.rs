//! # Cheapest augmenting path
//!
//! Label correcting shortest path search (Bellman-Ford) over the arcs with nonzero residual
//! capacity. Reverse arcs carry negated costs, so labels can decrease through negative arcs; a
//! label setting method like Dijkstra's would not be correct here.
//!
//! There is no detection of negative cycles. If the residual network contains one, the
//! predecessors might not form a tree, which is discovered when walking back from the sink.
use itertools::iproduct;
use log::trace;

use crate::algorithm::SolveError;
use crate::data::network::residual::Graph;
use crate::data::number_types::traits::Integer;

/// Result of a search in which the sink was reached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PredecessorTree<T> {
    /// For each vertex, the vertex from which its cheapest known path arrives, if any.
    pub predecessors: Vec<Option<usize>>,
    /// Cost label of the sink at the end of the search.
    pub sink_cost: T,
}

/// Search for a cheapest path from `source` to `sink` in the residual network.
///
/// Does `vertex_count` passes over all ordered pairs of distinct vertices, or stops sooner if a
/// pass doesn't improve any label, which yields the same result.
///
/// # Arguments
///
/// * `graph`: Network with current residual capacities.
/// * `source`: Vertex at which all paths start.
/// * `sink`: Vertex that should be reached.
///
/// # Return value
///
/// `None` if no path with nonzero residual capacity reaches the sink.
///
/// # Errors
///
/// When a cost label doesn't fit in `T`.
pub fn cheapest_path<T: Integer>(
    graph: &Graph<T>,
    source: usize,
    sink: usize,
) -> Result<Option<PredecessorTree<T>>, SolveError> {
    let n = graph.vertex_count();
    debug_assert!(source < n && sink < n);

    // Unreached vertices have no label
    let mut cost_to = vec![None; n];
    let mut predecessors = vec![None; n];
    cost_to[source] = Some(T::zero());

    for pass in 0..n {
        let mut relaxed = 0;

        for (u, v) in iproduct!(0..n, 0..n) {
            if u == v || !graph.edge_exists(u, v) {
                continue;
            }
            let Some(cost_u) = cost_to[u] else {
                continue;
            };

            let candidate = cost_u.checked_add(&graph.edge_cost(u, v))
                .ok_or(SolveError::Overflow("computing a path cost label"))?;
            if cost_to[v].is_none_or(|current| current > candidate) {
                cost_to[v] = Some(candidate);
                predecessors[v] = Some(u);
                relaxed += 1;
            }
        }

        trace!("Pass {}: {} labels improved", pass, relaxed);
        if relaxed == 0 {
            break;
        }
    }

    Ok(predecessors[sink].and(cost_to[sink]).map(|sink_cost| PredecessorTree {
        predecessors,
        sink_cost,
    }))
}
