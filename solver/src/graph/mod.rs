mod adjacency;
mod location;

pub use adjacency::Graph;
pub use location::LocationId;
