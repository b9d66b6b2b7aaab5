//! Priority queue entries and path reconstruction.

use std::cmp::Ordering;

use strata_graph::{EdgeIndex, NodeIndex};

/// Entry in the open set.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the smallest
/// priority compares greatest. Equal priorities pop the lower node index
/// first, which keeps results independent of heap internals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    /// g + h (h = 0 for uniform-cost search)
    pub priority: f64,
    /// g: cost from the start when the entry was pushed
    pub cost: f64,
    pub node: NodeIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp puts positive NaN above +inf but negative NaN below
        // -inf; the engine never pushes a NaN priority.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.cost.total_cmp(&self.cost))
    }
}

/// Walk predecessor links back from `goal`.
///
/// Returns the nodes from `start` to `goal` and the edges between them. The
/// walk stops after `predecessor.len()` steps, which no valid chain exceeds.
pub(crate) fn reconstruct(
    predecessor: &[Option<(NodeIndex, EdgeIndex)>],
    start: NodeIndex,
    goal: NodeIndex,
) -> (Vec<NodeIndex>, Vec<EdgeIndex>) {
    let mut nodes = vec![goal];
    let mut edges = Vec::new();
    let mut current = goal;

    while current != start && nodes.len() <= predecessor.len() {
        match predecessor[current.0] {
            Some((prev, edge)) => {
                nodes.push(prev);
                edges.push(edge);
                current = prev;
            }
            None => break,
        }
    }

    nodes.reverse();
    edges.reverse();
    (nodes, edges)
}
