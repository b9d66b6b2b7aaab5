//! The relaxation loop shared by both searches.
//!
//! Lazy deletion instead of decrease-key: every improvement pushes a new
//! entry and entries whose cost exceeds the recorded distance are skipped
//! when popped. The loop stops as soon as the goal is popped. That exit is
//! sound for uniform-cost search because stored weights are never negative.

use std::collections::{BTreeSet, BinaryHeap};

use strata_graph::{LayeredGraph, NodeIndex};
use tracing::debug;

use crate::frontier::{reconstruct, FrontierEntry};
use crate::result::{Algorithm, SearchLimits, SearchResult};

/// Run the loop with priority `g + heuristic(node)`.
///
/// `heuristic` is called at most once per node.
pub(crate) fn explore<H>(
    graph: &LayeredGraph,
    algorithm: Algorithm,
    start: NodeIndex,
    goal: NodeIndex,
    limits: SearchLimits,
    mut heuristic: H,
) -> SearchResult
where
    H: FnMut(NodeIndex) -> f64,
{
    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut predecessor = vec![None; n];
    let mut estimates: Vec<Option<f64>> = vec![None; n];
    let mut open = BinaryHeap::new();
    let mut visited_layers = BTreeSet::new();
    let mut expanded = 0usize;
    let mut truncated = false;
    let mut reached = false;

    // An undefined estimate makes the node infinitely far from the goal.
    let mut h = |node: NodeIndex| {
        *estimates[node.0].get_or_insert_with(|| {
            let value = heuristic(node);
            if value.is_nan() {
                f64::INFINITY
            } else {
                value
            }
        })
    };

    distance[start.0] = 0.0;
    open.push(FrontierEntry {
        priority: h(start),
        cost: 0.0,
        node: start,
    });

    while let Some(FrontierEntry { cost, node, .. }) = open.pop() {
        if cost > distance[node.0] {
            continue;
        }
        visited_layers.insert(graph.node(node).layer);

        if node == goal {
            reached = true;
            break;
        }
        if limits.max_expansions.is_some_and(|max| expanded >= max) {
            truncated = true;
            break;
        }
        expanded += 1;

        for &e in graph.outgoing(node) {
            let edge = graph.edge(e);
            let candidate = cost + edge.weight;
            // Strict: among equally cheap parallel edges the first one wins.
            if candidate < distance[edge.target.0] {
                distance[edge.target.0] = candidate;
                predecessor[edge.target.0] = Some((node, e));
                open.push(FrontierEntry {
                    priority: candidate + h(edge.target),
                    cost: candidate,
                    node: edge.target,
                });
            }
        }
    }

    let (nodes, edges) = if reached {
        reconstruct(&predecessor, start, goal)
    } else {
        (vec![goal], Vec::new())
    };
    let cost = if reached && distance[goal.0].is_finite() {
        distance[goal.0]
    } else {
        f64::NAN
    };

    debug!(
        %algorithm,
        start = %graph.node(start).id,
        goal = %graph.node(goal).id,
        cost,
        expanded,
        truncated,
        "search finished"
    );

    SearchResult {
        algorithm,
        path: nodes.iter().map(|&i| graph.node(i).id.clone()).collect(),
        edge_weights: edges.iter().map(|&e| graph.edge(e).weight).collect(),
        visited_layers,
        cost,
        expanded,
        truncated,
        heuristic_fallbacks: 0,
    }
}
