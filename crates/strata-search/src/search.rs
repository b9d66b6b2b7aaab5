//! Common interface of the path searches.

use strata_graph::{LayeredGraph, NodeIndex};

use crate::error::Result;
use crate::result::{Algorithm, SearchResult};

/// A least-cost path search over one graph.
///
/// Every call allocates its own working state, so one searcher may serve
/// many calls, including from several threads.
pub trait PathSearch {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// The graph being searched.
    fn graph(&self) -> &LayeredGraph;

    /// Find a path from `start` to `goal`.
    ///
    /// Fails only if either id is unknown. An unreachable goal returns a
    /// result with NaN cost.
    fn search(&self, start: &str, goal: &str) -> Result<SearchResult>;
}

/// Resolve both endpoints before any search state is allocated.
pub(crate) fn resolve(graph: &LayeredGraph, start: &str, goal: &str) -> Result<(NodeIndex, NodeIndex)> {
    let start = graph.index_of(start)?;
    let goal = graph.index_of(goal)?;
    Ok((start, goal))
}
