//! Strata Path Search
//!
//! Least-cost paths over a [`strata_graph::LayeredGraph`].
//!
//! # Algorithms
//!
//! - [`UniformCostSearch`]: Dijkstra with a binary heap, lazy deletion and
//!   early exit when the goal is popped. Optimal for the non-negative
//!   weights the graph stores.
//! - [`GuidedSearch`]: A* over the same relaxation loop, ordered by
//!   `g + h` where `h` blends straight-line distance with an optional
//!   learned [`CostEstimator`]. The learned term can overestimate, so the
//!   result is best-effort rather than optimal.
//!
//! Both return a [`SearchResult`]: the node path, the set of layers whose
//! nodes were settled, and the total cost (NaN when the goal is
//! unreachable).
//!
//! # Estimators
//!
//! Estimators are fitted once from [`training_samples`], the first half of
//! the graph's edges in insertion order, and passed explicitly to
//! [`GuidedSearch::with_estimator`]. [`RidgeEstimator`] is a linear model
//! over the six endpoint coordinates.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strata_graph::{GraphConfig, LayeredGraph};
//! use strata_search::{training_samples, GuidedSearch, PathSearch, RidgeEstimator, UniformCostSearch};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let graph = LayeredGraph::build(&GraphConfig::default(), &mut rng).unwrap();
//!
//! let exact = UniformCostSearch::new(&graph).search("P0_N0", "G4_N5").unwrap();
//! assert!(exact.is_reachable());
//!
//! let model = RidgeEstimator::fit(&training_samples(&graph), 1e-3).unwrap();
//! let guided = GuidedSearch::with_estimator(&graph, &model).search("P0_N0", "G4_N5").unwrap();
//! assert_eq!(guided.is_reachable(), exact.is_reachable());
//! ```

mod astar;
mod dijkstra;
mod engine;
mod error;
mod estimator;
mod frontier;
mod result;
mod ridge;
mod search;
pub mod trials;

pub use astar::{GuidedSearch, HeuristicWeights};
pub use dijkstra::UniformCostSearch;
pub use error::{EstimateError, Result, SearchError};
pub use estimator::{pair_features, training_samples, CostEstimator, TrainingSample, PAIR_FEATURES};
pub use result::{Algorithm, SearchLimits, SearchResult};
pub use ridge::RidgeEstimator;
pub use search::PathSearch;
pub use trials::{run_trials, Summary, TrialReport, TrialSummary};
