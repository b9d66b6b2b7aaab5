//! Error types for strata-search.

use strata_graph::GraphError;
use thiserror::Error;

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that abort a search before it starts.
///
/// An unreachable goal is not an error: it is reported through
/// [`crate::SearchResult::cost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A start or goal id that is not in the graph.
    #[error("unknown node id: {0:?}")]
    UnknownNode(String),

    /// Any other graph error.
    #[error(transparent)]
    Graph(GraphError),
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode(id) => SearchError::UnknownNode(id),
            other => SearchError::Graph(other),
        }
    }
}

/// Failures of a [`crate::CostEstimator`].
///
/// Estimation failures during a search are recovered locally; fit failures
/// are returned to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// The estimator has not been fitted.
    #[error("estimator is not fitted")]
    NotFitted,

    /// Feature vector of the wrong length.
    #[error("expected {expected} features, got {actual}")]
    FeatureShape { expected: usize, actual: usize },

    /// The model produced NaN or an infinity.
    #[error("estimate is not finite: {value}")]
    NonFinite { value: f64 },

    /// Fitting failed.
    #[error("training failed: {0}")]
    Training(String),
}
