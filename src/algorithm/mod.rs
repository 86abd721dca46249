//! # Algorithms
use thiserror::Error;

use crate::data::network::residual::EdgeError;

pub mod successive_shortest_path;
pub mod reachability;

/// A network in which a minimum cost maximum flow can be computed.
///
/// Flow already present in the network is kept: solving continues from the current residual
/// capacities. Solving a network that already carries a maximum flow does nothing.
pub trait SolveMinCostMaxFlow<T> {
    /// Send as much flow as possible from `source` to `sink`, as cheaply as possible.
    ///
    /// # Return value
    ///
    /// The accumulated flow value, the cost of the flow and the augmenting paths used by this call,
    /// in the order in which they were applied.
    ///
    /// # Errors
    ///
    /// If a terminal is out of range, if both terminals are the same vertex, or if the computation
    /// breaks down (an overflow, or a predecessor tree that doesn't lead back to the source).
    fn solve_min_cost_max_flow(&mut self, source: usize, sink: usize) -> Result<FlowResult<T>, SolveError>;

    /// Solve between the terminals stored in the network.
    fn solve(&mut self) -> Result<FlowResult<T>, SolveError>;
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlowResult<T> {
    /// Flow from source to sink, including flow from earlier solves.
    pub total_flow: T,
    /// Sum over all arcs of the flow times the cost per unit.
    pub total_cost: T,
    /// Augmenting paths, cheapest first.
    pub augmentations: Vec<Augmentation<T>>,
}

/// Flow pushed along a single augmenting path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Augmentation<T> {
    /// Vertices from the source to the sink.
    pub path: Vec<usize>,
    /// Units of flow pushed, the smallest residual capacity on the path.
    pub bottleneck: T,
    /// Cost of a single unit of flow along the path.
    pub cost: T,
}

/// Reasons for a solve to fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// A terminal is not a vertex of the network.
    #[error(transparent)]
    Terminal(#[from] EdgeError),
    /// Flow from a vertex to itself is not defined.
    #[error("source and sink are both vertex {0}")]
    SameTerminals(usize),
    /// The predecessor tree of a successful search didn't lead from the sink back to the source.
    ///
    /// This happens when the residual network contains a cycle of negative cost.
    #[error("walking back from sink {sink} stopped at vertex {reached} after {steps} steps without reaching the source")]
    InternalInvariantViolation {
        #[allow(missing_docs)]
        sink: usize,
        /// Last vertex visited.
        reached: usize,
        /// Number of arcs walked.
        steps: usize,
    },
    /// A value didn't fit in the integer type of the network.
    #[error("arithmetic overflow while {0}")]
    Overflow(&'static str),
}
