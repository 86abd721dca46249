//! # Reachability in the residual network
//!
//! Breadth-first search over the arcs that have positive residual capacity. Once a maximum flow is
//! found, the vertices reachable from the source form the source side of a minimum cut.
use std::iter::once;

use fifo_set::FIFOSet;
use itertools::Itertools;

use crate::data::network::residual::{EdgeError, Graph};
use crate::data::number_types::traits::Integer;

/// All vertices that can be reached from `start` using arcs with positive residual capacity.
///
/// # Return value
///
/// Sorted vertex indices, including `start`.
///
/// # Errors
///
/// If `start` is not a vertex of the network.
pub fn reachable<T: Integer>(graph: &Graph<T>, start: usize) -> Result<Vec<usize>, EdgeError> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut queue = once(start).collect::<FIFOSet<_>>();
    while let Some(u) = queue.pop() {
        for v in 0..n {
            if !visited[v] && graph.residual_capacity(u, v).is_positive() {
                visited[v] = true;
                queue.push(v);
            }
        }
    }

    Ok(visited.into_iter().positions(|is_visited| is_visited).collect())
}

impl<T: Integer> Graph<T> {
    /// Source side of the cut certified by the current residual capacities.
    ///
    /// After solving, the arcs leaving this set are saturated and their capacities sum to the
    /// maximum flow value.
    ///
    /// # Errors
    ///
    /// If `source` is not a vertex of the network.
    pub fn minimum_cut(&self, source: usize) -> Result<Vec<usize>, EdgeError> {
        reachable(self, source)
    }

    /// Total original capacity of the arcs leaving `side`.
    ///
    /// # Return value
    ///
    /// `None` if the value doesn't fit in `T`.
    ///
    /// # Errors
    ///
    /// If a vertex in `side` is not a vertex of the network.
    pub fn cut_capacity(&self, side: &[usize]) -> Result<Option<T>, EdgeError> {
        let mut inside = vec![false; self.vertex_count()];
        for &vertex in side {
            self.check_vertex(vertex)?;
            inside[vertex] = true;
        }

        Ok(side.iter()
            .flat_map(|&from| (0..self.vertex_count()).filter(|&to| !inside[to]).map(move |to| (from, to)))
            .try_fold(T::zero(), |total, (from, to)| total.checked_add(&self.original_capacity(from, to))))
    }
}
