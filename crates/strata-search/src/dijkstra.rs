//! Uniform-cost search (Dijkstra).

use strata_graph::LayeredGraph;

use crate::engine::explore;
use crate::error::Result;
use crate::result::{Algorithm, SearchLimits, SearchResult};
use crate::search::{resolve, PathSearch};

/// Dijkstra's algorithm with a binary heap and early exit at the goal.
///
/// Runs in `O((V + E) log V)`. The returned cost is optimal because stored
/// edge weights are never negative.
#[derive(Debug, Clone, Copy)]
pub struct UniformCostSearch<'g> {
    graph: &'g LayeredGraph,
    limits: SearchLimits,
}

impl<'g> UniformCostSearch<'g> {
    pub fn new(graph: &'g LayeredGraph) -> Self {
        Self {
            graph,
            limits: SearchLimits::UNBOUNDED,
        }
    }

    /// Builder: bound every search.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl PathSearch for UniformCostSearch<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn graph(&self) -> &LayeredGraph {
        self.graph
    }

    fn search(&self, start: &str, goal: &str) -> Result<SearchResult> {
        let (start, goal) = resolve(self.graph, start, goal)?;
        Ok(explore(
            self.graph,
            Algorithm::UniformCost,
            start,
            goal,
            self.limits,
            |_| 0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;
    use strata_graph::{EdgeKind, GraphConfig};

    fn default_graph() -> LayeredGraph {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        LayeredGraph::build(&GraphConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn start_equals_goal() {
        let graph = default_graph();
        let result = UniformCostSearch::new(&graph).search("S2_N4", "S2_N4").unwrap();

        assert_eq!(result.path, vec!["S2_N4"]);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.visited_layers, BTreeSet::from([2]));
        assert_eq!(result.expanded, 0);
    }

    #[test]
    fn bottom_to_top_crosses_every_layer() {
        let graph = default_graph();
        let result = UniformCostSearch::new(&graph).search("P0_N0", "G4_N5").unwrap();

        assert!(result.is_reachable());
        assert_eq!(result.path.first().map(String::as_str), Some("P0_N0"));
        assert_eq!(result.path.last().map(String::as_str), Some("G4_N5"));
        assert_eq!(result.visited_layers, BTreeSet::from([0, 1, 2, 3, 4]));

        let sum: f64 = result.edge_weights.iter().sum();
        assert!((result.cost - sum).abs() < 1e-9);

        let indices: Vec<_> = result.path.iter().map(|id| graph.index_of(id).unwrap()).collect();
        let walked = graph.path_weight(&indices).unwrap();
        assert!((result.cost - walked).abs() < 1e-9);
    }

    #[test]
    fn unknown_ids_fail_fast() {
        let graph = default_graph();
        let search = UniformCostSearch::new(&graph);

        assert_eq!(
            search.search("Z0_N0", "G4_N5").unwrap_err(),
            SearchError::UnknownNode("Z0_N0".into())
        );
        assert_eq!(
            search.search("P0_N0", "G4_N99").unwrap_err(),
            SearchError::UnknownNode("G4_N99".into())
        );
    }

    #[test]
    fn downward_goal_is_unreachable() {
        let graph = default_graph();
        let result = UniformCostSearch::new(&graph).search("G4_N0", "P0_N0").unwrap();

        assert!(!result.is_reachable());
        assert!(result.cost.is_nan());
        assert_eq!(result.path, vec!["P0_N0"]);
        // Only the goal ring is explored.
        assert_eq!(result.visited_layers, BTreeSet::from([4]));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let graph = default_graph();
        let search = UniformCostSearch::new(&graph);
        let first = search.search("P0_N3", "D3_N8").unwrap();
        for _ in 0..5 {
            let again = search.search("P0_N3", "D3_N8").unwrap();
            assert!(first.same_route(&again));
            assert_eq!(first.visited_layers, again.visited_layers);
        }
    }

    #[test]
    fn cheaper_than_any_single_layer_walk() {
        // Uniform weights: climbing costs 1 per layer, lateral steps 0.1.
        let graph = LayeredGraph::build_with_weights(&GraphConfig::new(3, 6), |kind, _| match kind {
            EdgeKind::Inter => 1.0,
            EdgeKind::Intra => 0.1,
        })
        .unwrap();
        let result = UniformCostSearch::new(&graph).search("P0_N0", "S2_N2").unwrap();

        // Two climbs reach slot 2 directly (0 -> 1 -> 2).
        assert!((result.cost - 2.0).abs() < 1e-12);
        assert_eq!(result.hop_count(), 2);
    }

    #[test]
    fn self_loops_never_improve_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let graph = LayeredGraph::build(&GraphConfig::new(5, 1), &mut rng).unwrap();
        let result = UniformCostSearch::new(&graph).search("P0_N0", "G4_N0").unwrap();

        assert_eq!(result.path, vec!["P0_N0", "N1_N0", "S2_N0", "D3_N0", "G4_N0"]);
        assert_eq!(result.visited_layers, BTreeSet::from([0, 1, 2, 3, 4]));
        // Each hop takes the cheaper of the two parallel edges.
        for (hop, w) in result.path.windows(2).zip(&result.edge_weights) {
            let a = graph.index_of(&hop[0]).unwrap();
            let cheapest = graph
                .outgoing(a)
                .iter()
                .map(|&e| graph.edge(e))
                .filter(|e| !e.is_self_loop())
                .map(|e| e.weight)
                .fold(f64::INFINITY, f64::min);
            assert_eq!(*w, cheapest);
        }
    }

    #[test]
    fn budget_turns_into_no_path() {
        let graph = default_graph();
        let search = UniformCostSearch::new(&graph).with_limits(SearchLimits::default().max_expansions(3));
        let result = search.search("P0_N0", "G4_N5").unwrap();

        assert!(result.truncated);
        assert!(!result.is_reachable());
        assert_eq!(result.expanded, 3);
    }
}
