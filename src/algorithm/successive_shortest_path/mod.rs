//! # Successive shortest paths
//!
//! Minimum cost maximum flow by repeatedly pushing flow along a cheapest augmenting path, until the
//! sink can no longer be reached in the residual network. Because every augmentation uses a
//! cheapest path, the flow after each augmentation is a cheapest flow of its value, as long as the
//! residual network never contains a cycle of negative cost.
//!
//! Every augmentation increases the flow by at least one unit, so the number of augmentations is
//! bounded by the maximum flow value. Each search takes `O(V^3)` time.
use log::{debug, info, trace};

use crate::algorithm::{FlowResult, SolveError, SolveMinCostMaxFlow};
use crate::algorithm::successive_shortest_path::augment::augment;
use crate::algorithm::successive_shortest_path::cheapest_path::cheapest_path;
use crate::data::network::residual::Graph;
use crate::data::number_types::traits::Integer;

pub mod cheapest_path;
pub mod augment;


impl<T: Integer> SolveMinCostMaxFlow<T> for Graph<T> {
    fn solve_min_cost_max_flow(&mut self, source: usize, sink: usize) -> Result<FlowResult<T>, SolveError> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Err(SolveError::SameTerminals(source));
        }

        let mut augmentations = Vec::new();
        while let Some(tree) = cheapest_path(self, source, sink)? {
            trace!("Sink reached with label {}", tree.sink_cost);
            let augmentation = augment(self, &tree, source, sink)?;
            debug!(
                "Augmentation {}: {} units along {:?} at {} per unit",
                augmentations.len() + 1, augmentation.bottleneck, augmentation.path, augmentation.cost,
            );

            augmentations.push(augmentation);
        }

        let total_cost = self.flow_cost().ok_or(SolveError::Overflow("computing the flow cost"))?;
        info!(
            "Flow from {} to {} is {} at cost {} after {} augmentations",
            source, sink, self.total_flow(), total_cost, augmentations.len(),
        );

        Ok(FlowResult { total_flow: self.total_flow(), total_cost, augmentations })
    }

    fn solve(&mut self) -> Result<FlowResult<T>, SolveError> {
        self.solve_min_cost_max_flow(self.source(), self.sink())
    }
}
