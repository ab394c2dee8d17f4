use crate::graph::{Graph, LocationId};

use super::store::CoordinateStore;

/// Straight-line distance from every location in a graph to one goal.
///
/// Built fresh for each search because it depends on the goal.
#[derive(Debug, Clone)]
pub struct HeuristicTable {
    estimates: Vec<f64>,
}

impl HeuristicTable {
    /// Fails if any location in `graph`, or the goal itself, has no
    /// coordinates.
    pub fn toward(
        graph: &Graph,
        coordinates: &CoordinateStore,
        goal: LocationId,
    ) -> eyre::Result<Self> {
        let goal_name = graph.name(goal);
        let estimates = graph
            .locations()
            .map(|id| coordinates.distance(graph.name(id), goal_name))
            .collect::<eyre::Result<Vec<_>>>()?;

        log::trace!(
            "heuristic table toward {}: {} entries",
            goal_name,
            estimates.len()
        );

        Ok(Self { estimates })
    }

    /// Table from raw estimates, indexed by location id.
    pub fn from_estimates(estimates: Vec<f64>) -> Self {
        Self { estimates }
    }

    pub fn estimate(&self, id: LocationId) -> f64 {
        self.estimates[id.index()]
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}
