use std::fmt;
use std::time::{Duration, Instant};

use crate::{
    algorithms::{AStar, BFS, BestFirst, DFS, IDDFS, SearchAlgorithm, Strategy},
    geo::{CoordinateStore, HeuristicTable},
    graph::{Graph, LocationId},
    memory,
};

/// Outcome of a single search invocation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub path: Option<Vec<String>>,
    pub distance: Option<f64>,
    pub elapsed: Duration,
    pub peak_memory_kb: Option<u64>,
}

impl SearchReport {
    /// number of edges on the path
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(path) = &self.path else {
            return write!(f, "No path found.");
        };

        writeln!(f, "Path: {}", path.join(" -> "))?;
        if let Some(distance) = self.distance {
            writeln!(f, "Total Distance: {:.4}", distance)?;
        }
        writeln!(f, "Total Time: {:.6} seconds", self.elapsed.as_secs_f64())?;
        match self.peak_memory_kb {
            Some(kb) => write!(f, "Memory Used: {} KB", kb),
            None => write!(f, "Memory Used: unavailable"),
        }
    }
}

/// Runs searches against a loaded graph and its coordinates.
pub struct SearchRunner<'a> {
    graph: &'a Graph,
    coordinates: &'a CoordinateStore,
}

impl<'a> SearchRunner<'a> {
    pub fn new(graph: &'a Graph, coordinates: &'a CoordinateStore) -> Self {
        Self { graph, coordinates }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Search from `from` to `to` with `strategy`.
    ///
    /// Unknown locations are rejected before any search starts. A missing
    /// path is reported through [`SearchReport::path`], not as an error. Only
    /// the search itself is timed; building the heuristic table is not.
    pub fn run(&self, from: &str, to: &str, strategy: Strategy) -> eyre::Result<SearchReport> {
        let start = self.graph.resolve(from)?;
        let goal = self.graph.resolve(to)?;

        log::debug!("{}: {} -> {}", strategy.name(), from, to);

        let (path, elapsed) = match strategy {
            Strategy::BFS => self.timed(&BFS, start, goal),
            Strategy::DFS => self.timed(&DFS, start, goal),
            Strategy::IDDFS => self.timed(&IDDFS, start, goal),
            Strategy::BestFirst => {
                let heuristic = HeuristicTable::toward(self.graph, self.coordinates, goal)?;
                self.timed(&BestFirst::new(&heuristic), start, goal)
            }
            Strategy::AStar => {
                let heuristic = HeuristicTable::toward(self.graph, self.coordinates, goal)?;
                self.timed(&AStar::new(&heuristic), start, goal)
            }
        };

        let path = path.map(|path| self.graph.names_of(&path));
        let distance = path
            .as_deref()
            .map(|path| self.coordinates.path_length(path))
            .transpose()?;

        match &path {
            Some(path) => log::info!(
                "{}: {} stops in {:?}",
                strategy.name(),
                path.len(),
                elapsed
            ),
            None => log::info!("{}: no path after {:?}", strategy.name(), elapsed),
        }

        Ok(SearchReport {
            strategy,
            path,
            distance,
            elapsed,
            peak_memory_kb: memory::peak_resident_kb(),
        })
    }

    fn timed(
        &self,
        algorithm: &impl SearchAlgorithm,
        start: LocationId,
        goal: LocationId,
    ) -> (Option<Vec<LocationId>>, Duration) {
        log::trace!("running {} over {} locations", algorithm.name(), self.graph.len());
        let search_start = Instant::now();
        let path = algorithm.find_path(self.graph, start, goal);
        (path, search_start.elapsed())
    }
}
