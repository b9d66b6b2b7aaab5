//! Console and JSON output.

use std::fmt;

use serde::Serialize;
use strata_graph::GraphConfig;
use strata_search::{SearchResult, Summary, TrialReport};

#[derive(Debug, Serialize)]
pub struct EstimatorReport {
    pub samples: usize,
    pub lambda: f64,
    pub training_mse: f64,
}

/// Everything one run produces.
#[derive(Debug, Serialize)]
pub struct Report {
    pub config: GraphConfig,
    pub seed: u64,
    pub edges: usize,
    pub rejected_edges: usize,
    pub estimator: Option<EstimatorReport>,
    pub dijkstra: SearchResult,
    pub astar: SearchResult,
    pub trials: Option<TrialReport>,
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &SearchResult) -> fmt::Result {
    writeln!(f, "{}:", result.algorithm)?;
    if result.is_reachable() {
        writeln!(f, "  path:     {}", result.path.join(" -> "))?;
        writeln!(f, "  cost:     {:.4} over {} hops", result.cost, result.hop_count())?;
    } else if result.truncated {
        writeln!(f, "  no path within the expansion budget")?;
    } else {
        writeln!(f, "  goal unreachable")?;
    }
    let layers: Vec<String> = result.visited_layers.iter().map(usize::to_string).collect();
    writeln!(f, "  layers:   {{{}}}", layers.join(", "))?;
    writeln!(f, "  expanded: {}", result.expanded)?;
    if result.heuristic_fallbacks > 0 {
        writeln!(f, "  fallbacks: {}", result.heuristic_fallbacks)?;
    }
    Ok(())
}

fn write_summary(f: &mut fmt::Formatter<'_>, name: &str, s: &Summary) -> fmt::Result {
    writeln!(f, "    {:<9} {:>12.4} ± {:.4}", name, s.mean, s.std_dev)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph: {} layers x {} nodes, {} edges, seed {}",
            self.config.layer_count, self.config.nodes_per_layer, self.edges, self.seed
        )?;
        if self.rejected_edges > 0 {
            writeln!(f, "  {} edges rejected for invalid weights", self.rejected_edges)?;
        }
        match &self.estimator {
            Some(e) => writeln!(
                f,
                "estimator: ridge (lambda {}), {} samples, training mse {:.6}",
                e.lambda, e.samples, e.training_mse
            )?,
            None => writeln!(f, "estimator: none")?,
        }
        writeln!(f)?;
        write_result(f, &self.dijkstra)?;
        write_result(f, &self.astar)?;

        if let Some(report) = &self.trials {
            writeln!(f)?;
            writeln!(
                f,
                "trials: {} (reachability agreed in {})",
                report.trials, report.reachability_agreement
            )?;
            for s in &report.summaries {
                writeln!(f, "  {}: {} reachable, {} truncated", s.algorithm, s.reachable, s.truncated)?;
                write_summary(f, "cost", &s.cost)?;
                write_summary(f, "micros", &s.micros)?;
                write_summary(f, "expanded", &s.expanded)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_graph::LayeredGraph;
    use strata_search::{GuidedSearch, PathSearch, UniformCostSearch};

    fn report() -> Report {
        let config = GraphConfig::new(3, 4);
        let graph = LayeredGraph::build_with_weights(&config, |_, _| 1.0).unwrap();
        Report {
            edges: graph.edge_count(),
            rejected_edges: 0,
            seed: 7,
            estimator: None,
            dijkstra: UniformCostSearch::new(&graph).search("P0_N0", "S2_N1").unwrap(),
            astar: GuidedSearch::new(&graph).search("S2_N1", "P0_N0").unwrap(),
            trials: None,
            config,
        }
    }

    #[test]
    fn text_report_lists_both_searches() {
        let text = report().to_string();
        assert!(text.starts_with("graph: 3 layers x 4 nodes"));
        assert!(text.contains("dijkstra:"));
        assert!(text.contains("path:     P0_N0 -> "));
        assert!(text.contains("a*:"));
        assert!(text.contains("goal unreachable"));
        assert!(text.contains("estimator: none"));
    }

    #[test]
    fn json_report_has_null_cost_when_unreachable() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["config"]["layer_count"], 3);
        assert!(json["astar"]["cost"].is_null());
        assert!(json["trials"].is_null());
    }
}
