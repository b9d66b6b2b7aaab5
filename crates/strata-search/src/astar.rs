//! Heuristic-guided search (A*).
//!
//! The heuristic blends the straight-line distance to the goal with an
//! optional learned estimate:
//!
//! ```text
//! h(n) = +inf                                  if a position has a NaN coordinate
//!      = geometric * geo + learned * model(n)  if the estimator succeeds
//!      = fallback * geo                        if it fails, returns a non-finite
//!                                              value or none is attached
//! ```
//!
//! # Admissibility
//!
//! Nothing bounds the learned term by the true remaining cost, so `h` may
//! overestimate. Results are best-effort: a path found here can cost more
//! than the uniform-cost optimum. Reachability is unaffected because both
//! searches relax the same edges until the open set is empty.

use serde::{Deserialize, Serialize};
use strata_graph::{LayeredGraph, NodeIndex, Position};
use tracing::{debug, warn};

use crate::engine::explore;
use crate::error::{EstimateError, Result};
use crate::estimator::CostEstimator;
use crate::result::{Algorithm, SearchLimits, SearchResult};
use crate::search::{resolve, PathSearch};

/// Blend coefficients of the guided heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Weight of the distance when the estimator succeeds
    pub geometric: f64,
    /// Weight of the learned estimate
    pub learned: f64,
    /// Weight of the distance when there is no usable estimate
    pub fallback: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            geometric: 0.6,
            learned: 0.4,
            fallback: 0.8,
        }
    }
}

/// A* over a layered graph with an optional learned cost estimator.
///
/// The estimator is an explicit dependency: [`GuidedSearch::new`] uses the
/// geometric term only, [`GuidedSearch::with_estimator`] blends in the
/// model. Estimation failures never abort a search; they fall back to the
/// geometric term and are counted in
/// [`SearchResult::heuristic_fallbacks`].
#[derive(Clone, Copy)]
pub struct GuidedSearch<'g> {
    graph: &'g LayeredGraph,
    estimator: Option<&'g dyn CostEstimator>,
    weights: HeuristicWeights,
    limits: SearchLimits,
}

impl<'g> GuidedSearch<'g> {
    /// Search guided by geometric distance alone.
    pub fn new(graph: &'g LayeredGraph) -> Self {
        Self {
            graph,
            estimator: None,
            weights: HeuristicWeights::default(),
            limits: SearchLimits::UNBOUNDED,
        }
    }

    /// Search guided by geometric distance and `estimator`.
    pub fn with_estimator(graph: &'g LayeredGraph, estimator: &'g dyn CostEstimator) -> Self {
        Self {
            estimator: Some(estimator),
            ..Self::new(graph)
        }
    }

    /// Builder: replace the blend coefficients.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder: bound every search.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn has_estimator(&self) -> bool {
        self.estimator.is_some()
    }

    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }

    /// Heuristic from position `a` to position `b`.
    ///
    /// The error, if any, is the estimator failure that forced the fallback.
    pub fn heuristic(&self, a: Position, b: Position) -> (f64, Option<EstimateError>) {
        if a.has_nan() || b.has_nan() {
            return (f64::INFINITY, None);
        }
        let geo = a.distance(&b);
        match self.estimator {
            Some(estimator) => match estimator.estimate_between(a, b) {
                Ok(learned) if learned.is_finite() => {
                    (self.weights.geometric * geo + self.weights.learned * learned, None)
                }
                Ok(value) => (self.weights.fallback * geo, Some(EstimateError::NonFinite { value })),
                Err(e) => (self.weights.fallback * geo, Some(e)),
            },
            None => (self.weights.fallback * geo, None),
        }
    }
}

impl std::fmt::Debug for GuidedSearch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuidedSearch")
            .field("nodes", &self.graph.node_count())
            .field("estimator", &self.estimator.is_some())
            .field("weights", &self.weights)
            .field("limits", &self.limits)
            .finish()
    }
}

impl PathSearch for GuidedSearch<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Guided
    }

    fn graph(&self) -> &LayeredGraph {
        self.graph
    }

    fn search(&self, start: &str, goal: &str) -> Result<SearchResult> {
        let (start, goal) = resolve(self.graph, start, goal)?;
        let target = self.graph.position(goal);
        let mut fallbacks = 0usize;

        let mut result = explore(
            self.graph,
            Algorithm::Guided,
            start,
            goal,
            self.limits,
            |node: NodeIndex| {
                let (h, failure) = self.heuristic(self.graph.position(node), target);
                if let Some(e) = failure {
                    fallbacks += 1;
                    debug!(node = %self.graph.node(node).id, error = %e, "cost estimate failed");
                }
                h
            },
        );

        if fallbacks > 0 {
            warn!(
                fallbacks,
                goal = %self.graph.node(goal).id,
                "estimator failed during search; used geometric fallback"
            );
        }
        result.heuristic_fallbacks = fallbacks;
        Ok(result)
    }
}
