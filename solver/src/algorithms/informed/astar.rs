use std::collections::HashSet;

use crate::{
    geo::HeuristicTable,
    graph::{Graph, LocationId},
};

use super::frontier::Frontier;
use crate::algorithms::traits::{SearchAlgorithm, extend_path};

/// A* over hop count.
///
/// `g` counts edges travelled while `h` is the straight-line distance from
/// the heuristic table, so the two terms are in different units. The search
/// does not re-open locations once they are expanded.
pub struct AStar<'h> {
    heuristic: &'h HeuristicTable,
}

impl<'h> AStar<'h> {
    pub fn new(heuristic: &'h HeuristicTable) -> Self {
        Self { heuristic }
    }
}

impl SearchAlgorithm for AStar<'_> {
    fn find_path(
        &self,
        graph: &Graph,
        start: LocationId,
        goal: LocationId,
    ) -> Option<Vec<LocationId>> {
        let mut frontier = Frontier::new(graph);
        let mut visited = HashSet::new();

        frontier.push(0.0, start, vec![start]);

        while let Some((current, path)) = frontier.pop() {
            if current == goal {
                log::debug!("a*: reached goal, {} entries pushed", frontier.pushed());
                return Some(path);
            }

            visited.insert(current);

            // the neighbour sits one edge past `current`, i.e. path.len() edges from start
            let g_score = path.len() as f64;

            for &neighbor in graph.neighbors(current) {
                if !visited.contains(&neighbor) {
                    let f_score = g_score + self.heuristic.estimate(neighbor);
                    frontier.push(f_score, neighbor, extend_path(&path, neighbor));
                }
            }
        }

        log::debug!("a*: frontier exhausted, {} entries pushed", frontier.pushed());
        None
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::fixtures::{self, route};

    #[test]
    fn takes_direct_edge_in_triangle() {
        let (graph, coordinates) = fixtures::triangle();
        let goal = graph.lookup("C").unwrap();
        let heuristic = HeuristicTable::toward(&graph, &coordinates, goal).unwrap();

        assert_eq!(
            route(&AStar::new(&heuristic), &graph, "A", "C").unwrap(),
            ["A", "C"]
        );
    }

    #[test]
    fn hop_count_outweighs_a_slightly_better_estimate() {
        // L1 looks closer than R, but the route through it is one hop longer.
        let graph = Graph::from_records([
            vec!["S", "L1", "R"],
            vec!["L1", "L2"],
            vec!["L2", "G"],
            vec!["R", "G"],
        ]);
        let id = |name| graph.lookup(name).unwrap();

        let mut estimates = vec![0.0; graph.len()];
        estimates[id("S").index()] = 3.0;
        estimates[id("L1").index()] = 1.0;
        estimates[id("L2").index()] = 0.6;
        estimates[id("R").index()] = 1.5;
        let heuristic = HeuristicTable::from_estimates(estimates);

        assert_eq!(
            route(&AStar::new(&heuristic), &graph, "S", "G").unwrap(),
            ["S", "R", "G"]
        );
        assert_eq!(
            route(&crate::algorithms::BestFirst::new(&heuristic), &graph, "S", "G").unwrap(),
            ["S", "L1", "L2", "G"]
        );
    }

    #[test]
    fn prefers_fewer_hops_on_uniform_estimates() {
        let graph = fixtures::lattice();
        let heuristic = HeuristicTable::from_estimates(vec![0.0; graph.len()]);
        let search = AStar::new(&heuristic);

        for start in graph.locations() {
            let reference = fixtures::hop_counts(&graph, start);
            for goal in graph.locations() {
                match (search.find_path(&graph, start, goal), reference[goal.index()]) {
                    (Some(path), Some(hops)) => {
                        assert!(fixtures::is_valid_walk(&graph, &path, start, goal));
                        assert_eq!(path.len() - 1, hops);
                    }
                    (None, None) => {}
                    (path, hops) => panic!("path {path:?} disagrees with reference {hops:?}"),
                }
            }
        }
    }

    #[test]
    fn isolated_goal_has_no_path() {
        let graph = fixtures::with_island();
        let heuristic = HeuristicTable::from_estimates(vec![0.0; graph.len()]);

        assert!(route(&AStar::new(&heuristic), &graph, "A", "Z").is_none());
    }

    #[test]
    fn every_path_is_a_valid_walk() {
        let graph = fixtures::lattice();
        let coordinates = fixtures::lattice_coordinates(&graph);

        for goal in graph.locations() {
            let heuristic = HeuristicTable::toward(&graph, &coordinates, goal).unwrap();
            let search = AStar::new(&heuristic);

            for start in graph.locations() {
                let reachable = fixtures::hop_counts(&graph, start)[goal.index()].is_some();
                match search.find_path(&graph, start, goal) {
                    Some(path) => assert!(fixtures::is_valid_walk(&graph, &path, start, goal)),
                    None => assert!(!reachable),
                }
            }
        }
    }
}
