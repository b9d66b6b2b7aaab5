//! Directed weighted edges.

use crate::NodeIndex;

/// Index of an edge, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeIndex(pub usize);

/// Which part of the topology an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeKind {
    /// Layer `L` to layer `L + 1`
    Inter,
    /// Within one layer
    Intra,
}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    /// Traversal cost: finite and non-negative
    pub weight: f64,
    pub kind: EdgeKind,
}

impl Edge {
    /// True if `weight` may be stored in a graph.
    pub fn is_admissible_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    /// True if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
