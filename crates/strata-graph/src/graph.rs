//! The layered multigraph and its one-pass construction.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GraphConfig;
use crate::edge::{Edge, EdgeIndex, EdgeKind};
use crate::error::{GraphError, Result};
use crate::node::{node_id, Node, NodeIndex};
use crate::topology::{inter_targets, intra_targets, ring_position};
use crate::weights::WeightModel;
use crate::Position;

/// A directed, weighted, layered multigraph.
///
/// Built in one pass by [`LayeredGraph::build`] and read-only afterwards.
/// Parallel edges and self-loops are allowed; adjacency lists keep edges in
/// insertion order.
#[derive(Debug, Clone)]
pub struct LayeredGraph {
    layer_count: usize,
    nodes_per_layer: usize,
    labels: Vec<String>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeIndex>>,
    ids: HashMap<String, NodeIndex>,
    rejected_edges: usize,
}

impl LayeredGraph {
    /// Build a graph with the default [`WeightModel`].
    pub fn build<R: Rng + ?Sized>(config: &GraphConfig, rng: &mut R) -> Result<Self> {
        Self::build_with_model(config, &WeightModel::default(), rng)
    }

    /// Build a graph with weights drawn from `model`.
    pub fn build_with_model<R: Rng + ?Sized>(
        config: &GraphConfig,
        model: &WeightModel,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let sampler = model.sampler()?;
        Self::build_with_weights(config, |kind, layer| match kind {
            EdgeKind::Inter => sampler.inter(layer, &mut *rng),
            EdgeKind::Intra => sampler.intra(&mut *rng),
        })
    }

    /// Build a graph taking every candidate edge's weight from `weight`.
    ///
    /// `weight` is called once per candidate edge with the edge kind and the
    /// source layer, in construction order: all inter-layer edges layer by
    /// layer, then all intra-layer edges. Weights that are NaN, infinite or
    /// negative are dropped and counted in [`LayeredGraph::rejected_edges`].
    pub fn build_with_weights<F>(config: &GraphConfig, mut weight: F) -> Result<Self>
    where
        F: FnMut(EdgeKind, usize) -> f64,
    {
        config.validate()?;
        let edge_capacity = config.edge_capacity()?;

        let layer_count = config.layer_count;
        let ring = config.nodes_per_layer;
        let labels: Vec<String> = config.labels[..layer_count].to_vec();

        let mut graph = Self {
            layer_count,
            nodes_per_layer: ring,
            labels,
            nodes: Vec::with_capacity(config.node_count()),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(config.node_count()),
            ids: HashMap::with_capacity(config.node_count()),
            rejected_edges: 0,
        };

        // Nodes
        for layer in 0..layer_count {
            for slot in 0..ring {
                let label = graph.labels[layer].clone();
                let id = node_id(&label, layer, slot);
                // The layer index keeps ids unique even when labels share an initial.
                graph.ids.insert(id.clone(), NodeIndex(graph.nodes.len()));
                graph.nodes.push(Node {
                    id,
                    layer,
                    slot,
                    label,
                    position: ring_position(layer, slot, layer_count, ring),
                });
                graph.outgoing.push(Vec::new());
            }
        }

        // Inter-layer edges
        for layer in 0..layer_count.saturating_sub(1) {
            for slot in 0..ring {
                let source = graph.index_at(layer, slot);
                for target_slot in inter_targets(slot, ring) {
                    let target = graph.index_at(layer + 1, target_slot);
                    let w = weight(EdgeKind::Inter, layer);
                    graph.admit(source, target, w, EdgeKind::Inter);
                }
            }
        }

        // Intra-layer edges
        for layer in 0..layer_count {
            for slot in 0..ring {
                let source = graph.index_at(layer, slot);
                for target_slot in intra_targets(slot, ring) {
                    let target = graph.index_at(layer, target_slot);
                    let w = weight(EdgeKind::Intra, layer);
                    graph.admit(source, target, w, EdgeKind::Intra);
                }
            }
        }

        info!(
            layers = layer_count,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            rejected = graph.rejected_edges,
            "built layered graph"
        );

        Ok(graph)
    }

    fn index_at(&self, layer: usize, slot: usize) -> NodeIndex {
        NodeIndex(layer * self.nodes_per_layer + slot)
    }

    fn admit(&mut self, source: NodeIndex, target: NodeIndex, weight: f64, kind: EdgeKind) {
        if !Edge::is_admissible_weight(weight) {
            debug!(
                source = %self.nodes[source.0].id,
                target = %self.nodes[target.0].id,
                weight,
                "dropping edge with invalid weight"
            );
            self.rejected_edges += 1;
            return;
        }
        let index = EdgeIndex(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight,
            kind,
        });
        self.outgoing[source.0].push(index);
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Ring size of every layer.
    pub fn nodes_per_layer(&self) -> usize {
        self.nodes_per_layer
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Candidate edges dropped during construction because of invalid weights.
    pub fn rejected_edges(&self) -> usize {
        self.rejected_edges
    }

    /// All nodes, in creation order (layer-major).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Label of `layer`, if the layer exists.
    pub fn label(&self, layer: usize) -> Option<&str> {
        self.labels.get(layer).map(String::as_str)
    }

    /// Labels of all layers, bottom to top.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Look up a node by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this graph.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }

    /// Look up an edge by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this graph.
    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index.0]
    }

    /// Position of a node.
    pub fn position(&self, index: NodeIndex) -> Position {
        self.nodes[index.0].position
    }

    /// Resolve a node id.
    pub fn index_of(&self, id: &str) -> Result<NodeIndex> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn outgoing(&self, index: NodeIndex) -> &[EdgeIndex] {
        &self.outgoing[index.0]
    }

    /// Nodes of one layer, in ring order. Empty for layers out of range.
    pub fn nodes_in_layer(&self, layer: usize) -> impl Iterator<Item = NodeIndex> + '_ {
        let range = if layer < self.layer_count {
            layer * self.nodes_per_layer..(layer + 1) * self.nodes_per_layer
        } else {
            0..0
        };
        range.map(NodeIndex)
    }

    /// First edge inserted from `source` to `target`.
    ///
    /// With parallel edges the earliest one wins.
    pub fn edge_between(&self, source: NodeIndex, target: NodeIndex) -> Option<&Edge> {
        self.outgoing
            .get(source.0)?
            .iter()
            .map(|&e| &self.edges[e.0])
            .find(|edge| edge.target == target)
    }

    /// Sum of [`LayeredGraph::edge_between`] weights along `path`.
    ///
    /// Returns `None` if some hop has no edge. A single-node path weighs 0.
    pub fn path_weight(&self, path: &[NodeIndex]) -> Option<f64> {
        path.windows(2)
            .map(|hop| self.edge_between(hop[0], hop[1]).map(|e| e.weight))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn default_graph(seed: u64) -> LayeredGraph {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        LayeredGraph::build(&GraphConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn default_graph_shape() {
        let graph = default_graph(42);
        assert_eq!(graph.node_count(), 50);
        // 4 layer gaps × 10 nodes × 2 + 5 layers × 10 nodes × 2
        assert_eq!(graph.edge_count(), 80 + 100);
        assert_eq!(graph.rejected_edges(), 0);
    }

    #[test]
    fn ids_and_labels() {
        let graph = default_graph(42);
        let start = graph.index_of("P0_N0").unwrap();
        let goal = graph.index_of("G4_N5").unwrap();

        assert_eq!(graph.node(start).layer, 0);
        assert_eq!(graph.node(start).label, "Physical");
        assert_eq!(graph.node(goal).layer, 4);
        assert_eq!(graph.node(goal).slot, 5);
        assert_eq!(graph.label(4), Some("Goal"));
        assert_eq!(graph.label(5), None);
    }

    #[test]
    fn unknown_id_is_error() {
        let graph = default_graph(42);
        let err = graph.index_of("X9_N9").unwrap_err();
        assert_eq!(err, GraphError::UnknownNode("X9_N9".into()));
        assert!(err.to_string().contains("X9_N9"));
    }

    #[test]
    fn inter_edges_move_up_one_layer() {
        let graph = default_graph(1);
        for edge in graph.edges() {
            let s = graph.node(edge.source).layer;
            let t = graph.node(edge.target).layer;
            match edge.kind {
                EdgeKind::Inter => assert_eq!(t, s + 1),
                EdgeKind::Intra => assert_eq!(t, s),
            }
        }
    }

    #[test]
    fn adjacency_in_insertion_order() {
        let graph = default_graph(3);
        let n0 = graph.index_of("N1_N0").unwrap();
        let targets: Vec<&str> = graph
            .outgoing(n0)
            .iter()
            .map(|&e| graph.node(graph.edge(e).target).id.as_str())
            .collect();
        assert_eq!(targets, vec!["S2_N0", "S2_N1", "N1_N1", "N1_N2"]);
    }

    #[test]
    fn top_layer_has_only_intra_edges() {
        let graph = default_graph(3);
        for node in graph.nodes_in_layer(4) {
            assert!(graph
                .outgoing(node)
                .iter()
                .all(|&e| graph.edge(e).kind == EdgeKind::Intra));
            assert_eq!(graph.outgoing(node).len(), 2);
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let a = default_graph(11);
        let b = default_graph(11);
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn invalid_weights_dropped() {
        let config = GraphConfig::new(2, 3);
        let mut calls = 0;
        let graph = LayeredGraph::build_with_weights(&config, |_, _| {
            calls += 1;
            match calls % 3 {
                0 => f64::NAN,
                1 => 1.0,
                _ => -1.0,
            }
        })
        .unwrap();

        // 6 inter + 12 intra candidates, one in three valid
        assert_eq!(calls, 18);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.rejected_edges(), 12);
        assert!(graph.edges().iter().all(|e| e.weight == 1.0));
    }

    #[test]
    fn invalid_config_fails_before_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for config in [GraphConfig::new(0, 10), GraphConfig::new(5, 0), GraphConfig::new(9, 2)] {
            let err = LayeredGraph::build(&config, &mut rng).unwrap_err();
            assert!(matches!(err, GraphError::InvalidConfig(_)), "{:?}", config);
        }
    }

    #[test]
    fn oversized_config_is_an_error() {
        let config = GraphConfig::new(5, usize::MAX / 4);
        let err = LayeredGraph::build_with_weights(&config, |_, _| 1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidConfig(_)));
    }

    #[test]
    fn single_node_rings_keep_self_loops() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let graph = LayeredGraph::build(&GraphConfig::new(3, 1), &mut rng).unwrap();

        assert_eq!(graph.node_count(), 3);
        // 2 parallel inter edges per gap, 2 self-loops per layer
        assert_eq!(graph.edge_count(), 2 * 2 + 3 * 2);
        let loops = graph.edges().iter().filter(|e| e.is_self_loop()).count();
        assert_eq!(loops, 6);

        let p = graph.index_of("P0_N0").unwrap();
        let n = graph.index_of("N1_N0").unwrap();
        let first = graph.outgoing(p)[0];
        assert_eq!(graph.edge_between(p, n), Some(graph.edge(first)));
    }

    #[test]
    fn path_weight_sums_first_edges() {
        let graph = default_graph(8);
        let a = graph.index_of("P0_N0").unwrap();
        let b = graph.index_of("N1_N1").unwrap();
        let c = graph.index_of("N1_N2").unwrap();

        let ab = graph.edge_between(a, b).unwrap().weight;
        let bc = graph.edge_between(b, c).unwrap().weight;
        assert_eq!(graph.path_weight(&[a, b, c]), Some(ab + bc));
        assert_eq!(graph.path_weight(&[a]), Some(0.0));
        assert_eq!(graph.path_weight(&[c, a]), None);
    }

    #[test]
    fn nodes_in_layer_out_of_range_is_empty() {
        let graph = default_graph(8);
        assert_eq!(graph.nodes_in_layer(2).count(), 10);
        assert_eq!(graph.nodes_in_layer(7).count(), 0);
    }
}
