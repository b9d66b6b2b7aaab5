//! Strata binary
//!
//! Builds a seeded layered graph, fits a cost estimator from its holdout
//! edges, runs uniform-cost and guided search between two nodes and reports
//! repeated-trial statistics.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strata_graph::{GraphConfig, LayeredGraph};
use strata_search::{
    run_trials, training_samples, GuidedSearch, PathSearch, RidgeEstimator, SearchLimits,
    UniformCostSearch,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::report::{EstimatorReport, Report};

/// Least-cost search across a layered graph.
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Dijkstra and learned-heuristic A* over a layered weighted graph")]
struct Args {
    /// Number of layers.
    #[arg(long, default_value = "5")]
    layers: usize,

    /// Nodes in each layer ring.
    #[arg(long, default_value = "10")]
    nodes: usize,

    /// Seed for edge weights and trial sampling.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Start node id.
    #[arg(long, default_value = "P0_N0")]
    start: String,

    /// Goal node id.
    #[arg(long, default_value = "G4_N5")]
    goal: String,

    /// Random bottom-to-top searches for the statistics (0 disables).
    #[arg(long, default_value = "50")]
    trials: usize,

    /// Ridge penalty for the estimator fit.
    #[arg(long, default_value = "1e-3")]
    lambda: f64,

    /// Guide A* by geometric distance only.
    #[arg(long)]
    no_estimator: bool,

    /// Stop each search after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Print a JSON document instead of the text report.
    #[arg(long)]
    json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "strata=debug" } else { "strata=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GraphConfig::new(args.layers, args.nodes);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let graph = LayeredGraph::build(&config, &mut rng).context("failed to build graph")?;

    let samples = training_samples(&graph);
    let model = if args.no_estimator {
        info!("estimator disabled");
        None
    } else {
        match RidgeEstimator::fit(&samples, args.lambda) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(error = %e, "estimator fit failed; A* uses geometric distance only");
                None
            }
        }
    };

    let limits = match args.max_expansions {
        Some(max) => SearchLimits::default().max_expansions(max),
        None => SearchLimits::UNBOUNDED,
    };
    let exact = UniformCostSearch::new(&graph).with_limits(limits);
    let guided = match &model {
        Some(m) => GuidedSearch::with_estimator(&graph, m),
        None => GuidedSearch::new(&graph),
    }
    .with_limits(limits);

    let dijkstra = exact
        .search(&args.start, &args.goal)
        .with_context(|| format!("dijkstra {} -> {}", args.start, args.goal))?;
    let astar = guided
        .search(&args.start, &args.goal)
        .with_context(|| format!("a* {} -> {}", args.start, args.goal))?;

    let trials = if args.trials > 0 {
        let searchers: [&dyn PathSearch; 2] = [&exact, &guided];
        Some(run_trials(&graph, &searchers, args.trials, &mut rng).context("trials failed")?)
    } else {
        None
    };

    let estimator = match &model {
        Some(m) => Some(EstimatorReport {
            samples: samples.len(),
            lambda: args.lambda,
            training_mse: m.mean_squared_error(&samples).context("estimator evaluation failed")?,
        }),
        None => None,
    };

    let report = Report {
        config,
        seed: args.seed,
        edges: graph.edge_count(),
        rejected_edges: graph.rejected_edges(),
        estimator,
        dijkstra,
        astar,
        trials,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
