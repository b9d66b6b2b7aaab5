//! Repeated random searches with cost and timing statistics.
//!
//! Each trial draws a start node from the bottom layer and a goal node from
//! the top layer, runs every searcher on the same pair and records cost and
//! wall time.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strata_graph::{LayeredGraph, NodeIndex};
use tracing::info;

use crate::error::Result;
use crate::result::Algorithm;
use crate::search::PathSearch;

/// Population mean and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Summarise `samples`. An empty sample has NaN mean and deviation.
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std_dev: f64::NAN,
            };
        }
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / count as f64;
        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Statistics of one algorithm over all trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub algorithm: Algorithm,
    pub trials: usize,
    /// Trials where the goal was reached
    pub reachable: usize,
    /// Trials cut short by the expansion budget
    pub truncated: usize,
    /// Cost over reachable trials
    pub cost: Summary,
    /// Wall time per search in microseconds, over all trials
    pub micros: Summary,
    pub expanded: Summary,
}

/// Outcome of [`run_trials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    pub trials: usize,
    /// One entry per searcher, in the order given
    pub summaries: Vec<TrialSummary>,
    /// Trials where every searcher agreed on reachability
    pub reachability_agreement: usize,
}

/// Run `trials` random bottom-to-top searches with every searcher.
///
/// Searchers should all be built over `graph`.
pub fn run_trials<R: Rng + ?Sized>(
    graph: &LayeredGraph,
    searchers: &[&dyn PathSearch],
    trials: usize,
    rng: &mut R,
) -> Result<TrialReport> {
    let top = graph.layer_count().saturating_sub(1);
    let ring = graph.nodes_per_layer();

    let mut costs = vec![Vec::new(); searchers.len()];
    let mut micros = vec![Vec::with_capacity(trials); searchers.len()];
    let mut expanded = vec![Vec::with_capacity(trials); searchers.len()];
    let mut truncated = vec![0usize; searchers.len()];
    let mut agreement = 0usize;

    for _ in 0..trials {
        // A built graph has at least one node per layer.
        let start = NodeIndex(rng.gen_range(0..ring));
        let goal = NodeIndex(top * ring + rng.gen_range(0..ring));
        let start = &graph.node(start).id;
        let goal = &graph.node(goal).id;

        let mut reachability = Vec::with_capacity(searchers.len());
        for (i, searcher) in searchers.iter().enumerate() {
            let began = Instant::now();
            let result = searcher.search(start, goal)?;
            micros[i].push(began.elapsed().as_secs_f64() * 1e6);
            expanded[i].push(result.expanded as f64);
            if result.truncated {
                truncated[i] += 1;
            }
            if result.is_reachable() {
                costs[i].push(result.cost);
            }
            reachability.push(result.is_reachable());
        }
        if reachability.windows(2).all(|w| w[0] == w[1]) {
            agreement += 1;
        }
    }

    let summaries: Vec<TrialSummary> = searchers
        .iter()
        .enumerate()
        .map(|(i, searcher)| TrialSummary {
            algorithm: searcher.algorithm(),
            trials,
            reachable: costs[i].len(),
            truncated: truncated[i],
            cost: Summary::from_samples(&costs[i]),
            micros: Summary::from_samples(&micros[i]),
            expanded: Summary::from_samples(&expanded[i]),
        })
        .collect();

    for s in &summaries {
        info!(
            algorithm = %s.algorithm,
            trials,
            reachable = s.reachable,
            mean_cost = s.cost.mean,
            mean_micros = s.micros.mean,
            "trials complete"
        );
    }

    Ok(TrialReport {
        trials,
        summaries,
        reachability_agreement: agreement,
    })
}
