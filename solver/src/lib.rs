pub mod algorithms;
pub mod geo;
pub mod graph;
pub mod loader;
pub mod memory;
pub mod runner;
pub mod session;

pub use algorithms::{SearchAlgorithm, Strategy};
pub use geo::{Coordinate, CoordinateStore, HeuristicTable};
pub use graph::{Graph, LocationId};
pub use runner::{SearchReport, SearchRunner};
pub use session::Session;
