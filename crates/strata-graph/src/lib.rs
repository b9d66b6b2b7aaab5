//! Strata Layered Graph
//!
//! A directed, weighted multigraph whose nodes are stacked in abstraction
//! layers (Physical → Network → Semantic → Decision → Goal by default).
//!
//! # Geometry
//!
//! Every layer is a ring of `n` nodes in the plane `z = 2 * layer`. The ring
//! radius grows with the layer index and each ring is rotated by
//! `0.3 * layer` radians so nodes never line up vertically:
//!
//! ```text
//! radius(L) = 5 * (1 + L / layer_count)
//! angle(L, i) = 2π i / n + 0.3 L
//! ```
//!
//! # Connectivity
//!
//! Each node has up to 4 outgoing edges:
//! - 2 inter-layer edges, to nodes `i` and `i + 1` of the next layer
//! - 2 intra-layer edges, to nodes `i + 1` and `i + 2` of its own ring
//!
//! Ring indices wrap modulo `n`. Inter-layer edges never skip or reverse a
//! layer, so any path from layer `a` to layer `b > a` crosses every layer in
//! between.
//!
//! # Weights
//!
//! Weights are sampled once at construction from an injected RNG and the
//! graph is immutable afterwards. Samples that are not finite and
//! non-negative are dropped instead of stored.

mod config;
mod edge;
mod error;
mod graph;
mod node;
mod position;
mod topology;
mod weights;

pub use config::{GraphConfig, DEFAULT_LABELS};
pub use edge::{Edge, EdgeIndex, EdgeKind};
pub use error::{GraphError, Result};
pub use graph::LayeredGraph;
pub use node::{node_id, Node, NodeIndex};
pub use position::Position;
pub use topology::{inter_targets, intra_targets, ring_position};
pub use weights::WeightModel;

/// Outgoing inter-layer edges per node (layers below the top one).
pub const INTER_CONNECTIONS: usize = 2;

/// Outgoing intra-layer edges per node.
pub const INTRA_CONNECTIONS: usize = 2;

/// Maximum outgoing edges per node.
pub const MAX_OUT_DEGREE: usize = INTER_CONNECTIONS + INTRA_CONNECTIONS;

/// Vertical distance between two consecutive layers.
pub const LAYER_SPACING: f64 = 2.0;

/// Angular offset applied per layer, in radians.
pub const LAYER_TWIST: f64 = 0.3;

/// Ring radius of layer 0. Radii grow linearly up to twice this value.
pub const BASE_RADIUS: f64 = 5.0;

const _: () = assert!(INTER_CONNECTIONS + INTRA_CONNECTIONS == MAX_OUT_DEGREE);
