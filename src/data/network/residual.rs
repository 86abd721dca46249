//! # Residual network
//!
//! A network stored as three dense matrices: the original capacities, the residual capacities and
//! the costs. Vertices are identified by their index, `0..vertex_count`.
//!
//! The residual matrix is the only mutable part once the arcs have been added. Pushing flow along
//! an arc lowers its residual capacity and raises the residual capacity of the reverse arc by the
//! same amount, such that the flow can later be undone.
//!
//! # Note
//!
//! An arc "exists", as far as the path search is concerned, exactly when its residual capacity is
//! nonzero. As a consequence, an arc added with zero capacity is indistinguishable from no arc at
//! all, and a saturated arc disappears until flow is pushed back along its reverse.
use itertools::iproduct;
use thiserror::Error;

use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::number_types::traits::Integer;

/// An arc could not be added, or a vertex could not be used.
///
/// The network is never modified when one of these is returned.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum EdgeError {
    /// A vertex index is not smaller than the number of vertices.
    #[error("vertex {vertex} is out of range for a network of {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the network.
        vertex_count: usize,
    },
    /// Capacities can't be negative.
    #[error("arc {from} -> {to} has a negative capacity")]
    NegativeCapacity {
        #[allow(missing_docs)]
        from: usize,
        #[allow(missing_docs)]
        to: usize,
    },
}

/// Flow realized on a single arc.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EdgeFlow<T> {
    /// Tail of the arc.
    pub from: usize,
    /// Head of the arc.
    pub to: usize,
    /// Units of flow on the arc, always positive.
    pub flow: T,
    /// Cost per unit of flow.
    pub cost: T,
}

/// Capacitated network with costs and residual capacities.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Graph<T> {
    /// Capacity of each arc as it was added, zero if there is no arc.
    capacity: SquareMatrix<T>,
    /// Capacity that is left, including capacity on reverse arcs created by pushing flow.
    residual: SquareMatrix<T>,
    /// Cost per unit of flow. Antisymmetric for every arc that was added.
    cost: SquareMatrix<T>,

    source: usize,
    sink: usize,
    /// Flow accumulated over all augmentations so far.
    total_flow: T,
}

impl<T: Integer> Graph<T> {
    /// Create a network without any arcs.
    ///
    /// The source is vertex `0` and the sink is the last vertex.
    ///
    /// # Arguments
    ///
    /// * `vertex_count`: Number of vertices, fixed for the lifetime of the network.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            capacity: SquareMatrix::zeros(vertex_count),
            residual: SquareMatrix::zeros(vertex_count),
            cost: SquareMatrix::zeros(vertex_count),

            source: 0,
            sink: vertex_count.saturating_sub(1),
            total_flow: T::zero(),
        }
    }

    /// Add an arc, or overwrite the arc that is already there.
    ///
    /// Besides the arc itself, this sets the cost of the reverse arc to `-cost`. Adding both
    /// `from -> to` and `to -> from` is not supported: the second call overwrites the cost of the
    /// first.
    ///
    /// # Arguments
    ///
    /// * `from`: Tail of the arc.
    /// * `to`: Head of the arc.
    /// * `capacity`: Maximum flow on the arc, nonnegative.
    /// * `cost`: Cost per unit of flow, possibly negative.
    ///
    /// # Errors
    ///
    /// If either vertex is out of range, or the capacity is negative. Nothing is changed in that
    /// case.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: T, cost: T) -> Result<(), EdgeError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity.is_negative() {
            return Err(EdgeError::NegativeCapacity { from, to });
        }

        self.capacity[(from, to)] = capacity;
        self.residual[(from, to)] = capacity;
        self.cost[(from, to)] = cost;
        self.cost[(to, from)] = -cost;

        Ok(())
    }

    /// Choose the vertices between which flow is sent.
    ///
    /// # Errors
    ///
    /// If either vertex is out of range, in which case the terminals are unchanged.
    pub fn set_terminals(&mut self, source: usize, sink: usize) -> Result<(), EdgeError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;

        self.source = source;
        self.sink = sink;

        Ok(())
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), EdgeError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(EdgeError::OutOfRange { vertex, vertex_count: self.vertex_count() })
        }
    }

    /// Whether more flow can currently be sent from `u` to `v`.
    pub fn edge_exists(&self, u: usize, v: usize) -> bool {
        !self.residual[(u, v)].is_zero()
    }

    /// Capacity left on the arc from `u` to `v`.
    pub fn residual_capacity(&self, u: usize, v: usize) -> T {
        self.residual[(u, v)]
    }

    /// Capacity of the arc from `u` to `v` as it was added.
    pub fn original_capacity(&self, u: usize, v: usize) -> T {
        self.capacity[(u, v)]
    }

    /// Cost per unit of flow from `u` to `v`.
    pub fn edge_cost(&self, u: usize, v: usize) -> T {
        self.cost[(u, v)]
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.capacity.order()
    }

    #[allow(missing_docs)]
    pub fn source(&self) -> usize {
        self.source
    }

    #[allow(missing_docs)]
    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Flow sent from the source to the sink by all augmentations so far.
    pub fn total_flow(&self) -> T {
        self.total_flow
    }

    /// All arcs carrying flow, ordered by tail and then by head.
    pub fn edge_flows(&self) -> impl Iterator<Item = EdgeFlow<T>> + '_ {
        let n = self.vertex_count();

        iproduct!(0..n, 0..n).filter_map(move |(from, to)| {
            let capacity = self.capacity[(from, to)];
            if capacity.is_zero() {
                return None;
            }

            let flow = capacity - self.residual[(from, to)];
            flow.is_positive().then(|| EdgeFlow { from, to, flow, cost: self.cost[(from, to)] })
        })
    }

    /// Total cost of the flow currently in the network.
    ///
    /// # Return value
    ///
    /// `None` if the value doesn't fit in `T`.
    pub fn flow_cost(&self) -> Option<T> {
        self.edge_flows().try_fold(T::zero(), |total, edge| {
            edge.flow.checked_mul(&edge.cost).and_then(|cost| total.checked_add(&cost))
        })
    }

    #[allow(missing_docs)]
    pub fn capacities(&self) -> &SquareMatrix<T> {
        &self.capacity
    }

    #[allow(missing_docs)]
    pub fn residuals(&self) -> &SquareMatrix<T> {
        &self.residual
    }

    #[allow(missing_docs)]
    pub fn costs(&self) -> &SquareMatrix<T> {
        &self.cost
    }

    pub(crate) fn residual_mut(&mut self) -> &mut SquareMatrix<T> {
        &mut self.residual
    }

    pub(crate) fn total_flow_mut(&mut self) -> &mut T {
        &mut self.total_flow
    }
}
