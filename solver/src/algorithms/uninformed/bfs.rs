use std::collections::{HashSet, VecDeque};

use crate::{
    algorithms::traits::{SearchAlgorithm, extend_path},
    graph::{Graph, LocationId},
};

/// Breadth-first search over hop count.
///
/// Locations are marked visited when dequeued rather than when enqueued, so a
/// location can sit in the queue several times before it is first expanded.
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl SearchAlgorithm for BFS {
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(start, vec![start])]);
        let mut expanded = 0usize;

        while let Some((current, path)) = queue.pop_front() {
            if current == goal {
                log::debug!("bfs: reached goal after {} expansions", expanded);
                return Some(path);
            }

            visited.insert(current);
            expanded += 1;

            for &neighbor in graph.neighbors(current) {
                if !visited.contains(&neighbor) {
                    queue.push_back((neighbor, extend_path(&path, neighbor)));
                }
            }
        }

        log::debug!("bfs: frontier exhausted after {} expansions", expanded);
        None
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
