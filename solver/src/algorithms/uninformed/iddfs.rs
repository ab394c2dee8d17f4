use std::collections::HashSet;

use crate::graph::{Graph, LocationId};

use super::{Frame, next_unvisited, stack_path};
use crate::algorithms::traits::SearchAlgorithm;

/// Iterative-deepening depth-first search.
///
/// Depth-limited passes only ever walk simple paths, so nothing deeper than
/// `graph.len() - 1` can succeed and the deepening stops there.
#[allow(clippy::upper_case_acronyms)]
pub struct IDDFS;

impl SearchAlgorithm for IDDFS {
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>> {
        let max_depth = graph.len().saturating_sub(1);

        let path = (0..=max_depth).find_map(|depth| {
            log::trace!("iddfs: trying depth {}", depth);
            depth_limited_search(graph, start, goal, depth)
        });

        match &path {
            Some(path) => log::debug!("iddfs: reached goal at depth {}", path.len() - 1),
            None => log::debug!("iddfs: no path within depth {}", max_depth),
        }

        path
    }

    fn name(&self) -> &'static str {
        "IDDFS"
    }
}

/// Depth-first search that only succeeds when the goal is reached after
/// exactly `depth` edges. Reaching the goal earlier does not count; the goal
/// is then expanded like any other location.
///
/// The visited set is private to this call.
pub fn depth_limited_search(
    graph: &Graph,
    start: LocationId,
    goal: LocationId,
    depth: usize,
) -> Option<Vec<LocationId>> {
    if depth == 0 {
        return (start == goal).then(|| vec![start]);
    }

    let mut visited = HashSet::from([start]);
    let mut stack = vec![Frame::new(start)];

    loop {
        let remaining = depth - (stack.len() - 1);
        let frame = stack.last_mut()?;

        let Some(neighbor) = next_unvisited(graph, frame, &visited) else {
            stack.pop();
            if stack.is_empty() {
                return None;
            }
            continue;
        };

        if remaining == 1 {
            if neighbor == goal {
                return Some(stack_path(&stack, neighbor));
            }
        } else {
            visited.insert(neighbor);
            stack.push(Frame::new(neighbor));
        }
    }
}
