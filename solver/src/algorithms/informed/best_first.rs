use std::collections::HashSet;

use crate::{
    geo::HeuristicTable,
    graph::{Graph, LocationId},
};

use super::frontier::Frontier;
use crate::algorithms::traits::{SearchAlgorithm, extend_path};

/// Greedy best-first search: always expands the frontier entry whose location
/// looks closest to the goal, ignoring how far it has already travelled.
pub struct BestFirst<'h> {
    heuristic: &'h HeuristicTable,
}

impl<'h> BestFirst<'h> {
    pub fn new(heuristic: &'h HeuristicTable) -> Self {
        Self { heuristic }
    }
}

impl SearchAlgorithm for BestFirst<'_> {
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>> {
        let mut frontier = Frontier::new(graph);
        let mut visited = HashSet::new();

        frontier.push(self.heuristic.estimate(start), start, vec![start]);

        while let Some((current, path)) = frontier.pop() {
            if current == goal {
                log::debug!("best-first: reached goal, {} entries pushed", frontier.pushed());
                return Some(path);
            }

            visited.insert(current);

            for &neighbor in graph.neighbors(current) {
                if !visited.contains(&neighbor) {
                    frontier.push(
                        self.heuristic.estimate(neighbor),
                        neighbor,
                        extend_path(&path, neighbor),
                    );
                }
            }
        }

        log::debug!("best-first: frontier exhausted, {} entries pushed", frontier.pushed());
        None
    }

    fn name(&self) -> &'static str {
        "Best-First"
    }
}
