use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, LocationId};

struct Candidate<'g> {
    priority: f64,
    name: &'g str,
    sequence: usize,
    node: LocationId,
    path: Vec<LocationId>,
}

// min-heap on priority, ties broken by location name and then by push order
impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

/// Priority frontier of (location, path) entries, lowest priority first.
pub(super) struct Frontier<'g> {
    graph: &'g Graph,
    heap: BinaryHeap<Candidate<'g>>,
    pushed: usize,
}

impl<'g> Frontier<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, priority: f64, node: LocationId, path: Vec<LocationId>) {
        self.heap.push(Candidate {
            priority,
            name: self.graph.name(node),
            sequence: self.pushed,
            node,
            path,
        });
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<(LocationId, Vec<LocationId>)> {
        self.heap
            .pop()
            .map(|candidate| (candidate.node, candidate.path))
    }

    /// total entries ever pushed
    pub fn pushed(&self) -> usize {
        self.pushed
    }
}
