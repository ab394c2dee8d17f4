mod bfs;
mod dfs;
mod iddfs;

use std::collections::HashSet;

use crate::graph::{Graph, LocationId};

pub use bfs::BFS;
pub use dfs::DFS;
pub use iddfs::{IDDFS, depth_limited_search};

/// One level of an explicit depth-first stack: the location being expanded
/// and how far through its neighbour list the expansion has got.
struct Frame {
    node: LocationId,
    cursor: usize,
}

impl Frame {
    fn new(node: LocationId) -> Self {
        Self { node, cursor: 0 }
    }
}

/// Advance `frame` to its next neighbour that is not yet visited.
///
/// The visited check happens here rather than when the frame is pushed, so a
/// neighbour claimed by a deeper branch is skipped the same way a recursive
/// search would skip it.
fn next_unvisited(
    graph: &Graph,
    frame: &mut Frame,
    visited: &HashSet<LocationId>,
) -> Option<LocationId> {
    let neighbors = graph.neighbors(frame.node);
    let offset = neighbors[frame.cursor..]
        .iter()
        .position(|neighbor| !visited.contains(neighbor))?;

    let neighbor = neighbors[frame.cursor + offset];
    frame.cursor += offset + 1;
    Some(neighbor)
}

/// path spelled out by the stack, followed by `last`
fn stack_path(stack: &[Frame], last: LocationId) -> Vec<LocationId> {
    stack
        .iter()
        .map(|frame| frame.node)
        .chain(std::iter::once(last))
        .collect()
}
