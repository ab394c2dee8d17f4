use crate::graph::{Graph, LocationId};

pub trait SearchAlgorithm {
    /// Returns the path from `start` to `goal`, both inclusive, or `None`
    /// once the reachable space is exhausted.
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>>;

    fn name(&self) -> &'static str;
}

pub(crate) fn extend_path(path: &[LocationId], next: LocationId) -> Vec<LocationId> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(next);
    extended
}
