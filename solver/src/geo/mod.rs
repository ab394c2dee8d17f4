mod coordinate;
mod heuristic;
mod store;

pub use coordinate::Coordinate;
pub use heuristic::HeuristicTable;
pub use store::CoordinateStore;
