use std::collections::HashSet;

use crate::graph::{Graph, LocationId};

use super::{Frame, next_unvisited, stack_path};
use crate::algorithms::traits::SearchAlgorithm;

/// Depth-first search in neighbour-list order, returning the first path it
/// finds. The visited set is shared across every branch of one search.
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl SearchAlgorithm for DFS {
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>> {
        if start == goal {
            return Some(vec![start]);
        }

        let mut visited = HashSet::from([start]);
        let mut stack = vec![Frame::new(start)];

        while let Some(frame) = stack.last_mut() {
            let Some(neighbor) = next_unvisited(graph, frame, &visited) else {
                stack.pop();
                continue;
            };

            if neighbor == goal {
                log::debug!("dfs: reached goal at depth {}", stack.len());
                return Some(stack_path(&stack, neighbor));
            }

            visited.insert(neighbor);
            stack.push(Frame::new(neighbor));
        }

        log::debug!("dfs: exhausted {} locations", visited.len());
        None
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
