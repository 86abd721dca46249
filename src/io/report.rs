//! # Reporting
//!
//! Human readable text for networks and the flows computed in them. All numbers are printed in
//! decimal; matrices are aligned in columns of fixed width.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::{Augmentation, FlowResult};
use crate::data::linear_algebra::matrix::SquareMatrix;
use crate::data::network::residual::{EdgeFlow, Graph};
use crate::data::number_types::traits::Integer;

/// Renders as `0 -> 1 -> 3 (1)  $2`: the path, the units pushed and the cost per unit.
impl<T: Integer> Display for Augmentation<T> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "{} ({})  ${}", self.path.iter().join(" -> "), self.bottleneck, self.cost)
    }
}

/// Renders as `Flow 0 -> 1 (1)  $1`: the arc, the units on it and the cost per unit.
impl<T: Integer> Display for EdgeFlow<T> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "Flow {} -> {} ({})  ${}", self.from, self.to, self.flow, self.cost)
    }
}

/// A labeled matrix, preceded by an empty line.
pub fn matrix<T: Integer>(label: &str, matrix: &SquareMatrix<T>) -> String {
    format!("\n {} \n{}", label, matrix)
}

/// Everything known about a network after solving it.
pub struct Summary<'a, T> {
    graph: &'a Graph<T>,
    result: &'a FlowResult<T>,
    minimum_cut: &'a [usize],
}

impl<'a, T: Integer> Summary<'a, T> {
    /// Collect the parts of the summary.
    ///
    /// # Arguments
    ///
    /// * `graph`: The network after solving.
    /// * `result`: What the solve returned.
    /// * `minimum_cut`: Source side of the minimum cut, sorted.
    pub fn new(graph: &'a Graph<T>, result: &'a FlowResult<T>, minimum_cut: &'a [usize]) -> Self {
        Self { graph, result, minimum_cut }
    }
}

impl<'a, T: Integer> Display for Summary<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "WEIGHTED FLOW:")?;
        for augmentation in &self.result.augmentations {
            writeln!(f, "{}", augmentation)?;
        }
        writeln!(f)?;

        writeln!(f, "FINAL EDGE FLOW:")?;
        for edge_flow in self.graph.edge_flows() {
            writeln!(f, "{}", edge_flow)?;
        }
        writeln!(f, "TOTAL FLOW: {}", self.result.total_flow)?;
        writeln!(f, "TOTAL COST: {}", self.result.total_cost)?;
        writeln!(f, "MINIMUM CUT: {{{}}}", self.minimum_cut.iter().join(", "))
    }
}
