//! Learned cost estimation interface.
//!
//! A [`CostEstimator`] maps the concatenated coordinates of two positions to
//! a predicted traversal cost. Estimators are fitted once, outside any
//! search, from pairs `pair_features(source, target) -> weight` drawn from
//! the graph's own edges, and are read-only afterwards.

use strata_graph::{LayeredGraph, Position};

use crate::error::EstimateError;

/// Length of the feature vector built by [`pair_features`].
pub const PAIR_FEATURES: usize = 6;

/// `[a.x, a.y, a.z, b.x, b.y, b.z]`.
pub fn pair_features(a: Position, b: Position) -> [f64; PAIR_FEATURES] {
    [a.x, a.y, a.z, b.x, b.y, b.z]
}

/// A fitted cost model.
pub trait CostEstimator: Send + Sync {
    /// Predict a cost from a feature vector of length [`PAIR_FEATURES`].
    fn estimate(&self, features: &[f64]) -> Result<f64, EstimateError>;

    /// Predict the cost of moving from `a` to `b`.
    fn estimate_between(&self, a: Position, b: Position) -> Result<f64, EstimateError> {
        self.estimate(&pair_features(a, b))
    }
}

impl<E: CostEstimator + ?Sized> CostEstimator for &E {
    fn estimate(&self, features: &[f64]) -> Result<f64, EstimateError> {
        (**self).estimate(features)
    }
}

impl<E: CostEstimator + ?Sized> CostEstimator for Box<E> {
    fn estimate(&self, features: &[f64]) -> Result<f64, EstimateError> {
        (**self).estimate(features)
    }
}

/// One regression example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    pub features: [f64; PAIR_FEATURES],
    pub target: f64,
}

/// Training examples from the first half of the graph's edges.
///
/// The split follows edge insertion order rather than a random draw, so the
/// holdout is deterministic for a given graph: `ceil(edge_count / 2)` edges,
/// which for the standard construction are mostly inter-layer edges.
pub fn training_samples(graph: &LayeredGraph) -> Vec<TrainingSample> {
    let take = graph.edge_count().div_ceil(2);
    graph
        .edges()
        .iter()
        .take(take)
        .map(|edge| TrainingSample {
            features: pair_features(graph.position(edge.source), graph.position(edge.target)),
            target: edge.weight,
        })
        .collect()
}
