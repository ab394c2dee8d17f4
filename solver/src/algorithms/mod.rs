pub mod informed;
pub mod traits;
pub mod uninformed;

use clap::ValueEnum;

pub use informed::{AStar, BestFirst};
pub use traits::SearchAlgorithm;
pub use uninformed::{BFS, DFS, IDDFS, depth_limited_search};

/// Search strategy selector. Value names accept the tokens of the
/// interactive prompt (`BFS`, `BEST_FIRST`, `A_STAR`, ...) case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Breadth-first search, fewest hops
    #[value(name = "bfs", alias = "breadth-first")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Depth-first search, first path found
    #[value(name = "dfs", alias = "depth-first")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Iterative-deepening depth-first search
    #[value(name = "iddfs", alias = "iterative-deepening")]
    #[allow(clippy::upper_case_acronyms)]
    IDDFS,

    /// Greedy best-first search on straight-line distance to the goal
    #[value(name = "best-first", aliases = ["best_first", "greedy"])]
    BestFirst,

    /// A* with hop count plus straight-line distance
    #[value(name = "a-star", aliases = ["a_star", "astar"])]
    AStar,
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BFS, Self::DFS, Self::IDDFS, Self::BestFirst, Self::AStar].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BFS => "BFS",
            Self::DFS => "DFS",
            Self::IDDFS => "IDDFS",
            Self::BestFirst => "Best-First",
            Self::AStar => "A*",
        }
    }

    /// whether the strategy consults a heuristic table
    pub fn is_informed(&self) -> bool {
        matches!(self, Self::BestFirst | Self::AStar)
    }

    /// Parse a selector token, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token.trim(), true).ok()
    }
}
