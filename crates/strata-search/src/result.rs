//! Search parameters and results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which search produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Dijkstra
    UniformCost,
    /// A* with the blended heuristic
    Guided,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::UniformCost => write!(f, "dijkstra"),
            Algorithm::Guided => write!(f, "a*"),
        }
    }
}

/// Bounds on a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Stop after expanding this many nodes (None = unbounded).
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bounds.
    pub const UNBOUNDED: Self = Self { max_expansions: None };

    /// Builder: cap the number of expansions.
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

/// Outcome of one search.
///
/// An unreachable goal is a normal outcome: `cost` is NaN and `path` is the
/// degenerate `[goal]`. Check [`SearchResult::is_reachable`] before using
/// the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Node ids from start to goal
    pub path: Vec<String>,
    /// Weights of the edges traversed, one per hop
    pub edge_weights: Vec<f64>,
    /// Layers of every node popped from the open set and not stale
    pub visited_layers: BTreeSet<usize>,
    /// Total path cost, NaN when the goal was not reached
    pub cost: f64,
    /// Nodes expanded (popped and relaxed)
    pub expanded: usize,
    /// The expansion budget ran out before the goal was popped
    pub truncated: bool,
    /// Estimator failures recovered with the geometric fallback
    pub heuristic_fallbacks: usize,
}

impl SearchResult {
    /// True if the goal was reached.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.edge_weights.len()
    }

    /// Same path and cost. NaN costs compare equal to each other.
    pub fn same_route(&self, other: &Self) -> bool {
        let same_cost = self.cost == other.cost || (self.cost.is_nan() && other.cost.is_nan());
        same_cost && self.path == other.path
    }
}
