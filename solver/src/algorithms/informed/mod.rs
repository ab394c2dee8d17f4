mod astar;
mod best_first;
mod frontier;

pub use astar::AStar;
pub use best_first::BestFirst;
