//! Construction parameters.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::MAX_OUT_DEGREE;

/// Layer labels in stacking order, bottom to top.
pub const DEFAULT_LABELS: [&str; 5] = ["Physical", "Network", "Semantic", "Decision", "Goal"];

/// Shape of a layered graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Number of layers (must be at least 1)
    pub layer_count: usize,
    /// Nodes on each layer's ring (must be at least 1)
    pub nodes_per_layer: usize,
    /// One label per layer; extra entries are ignored
    pub labels: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LABELS.len(),
            nodes_per_layer: 10,
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GraphConfig {
    /// Config with the default label table.
    pub fn new(layer_count: usize, nodes_per_layer: usize) -> Self {
        Self {
            layer_count,
            nodes_per_layer,
            ..Self::default()
        }
    }

    /// Builder: set the number of layers.
    #[must_use]
    pub fn layer_count(mut self, layer_count: usize) -> Self {
        self.layer_count = layer_count;
        self
    }

    /// Builder: set the ring size.
    #[must_use]
    pub fn nodes_per_layer(mut self, nodes_per_layer: usize) -> Self {
        self.nodes_per_layer = nodes_per_layer;
        self
    }

    /// Builder: replace the label table.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Check the preconditions of [`crate::LayeredGraph::build`].
    pub fn validate(&self) -> Result<()> {
        if self.layer_count == 0 {
            return Err(GraphError::InvalidConfig("layer_count must be at least 1".into()));
        }
        if self.nodes_per_layer == 0 {
            return Err(GraphError::InvalidConfig(
                "nodes_per_layer must be at least 1".into(),
            ));
        }
        if self.labels.len() < self.layer_count {
            return Err(GraphError::InvalidConfig(format!(
                "label table has {} entries but {} layers were requested",
                self.labels.len(),
                self.layer_count
            )));
        }
        // Node ids start with the label's initial.
        if let Some(layer) = self.labels[..self.layer_count]
            .iter()
            .position(|label| label.trim().is_empty())
        {
            return Err(GraphError::InvalidConfig(format!(
                "label for layer {} is empty",
                layer
            )));
        }
        self.edge_capacity()?;
        Ok(())
    }

    /// Total number of nodes the config describes.
    ///
    /// Saturates for configs that [`GraphConfig::validate`] rejects.
    pub fn node_count(&self) -> usize {
        self.layer_count.saturating_mul(self.nodes_per_layer)
    }

    /// Upper bound on the edge count, checked against the address space.
    pub(crate) fn edge_capacity(&self) -> Result<usize> {
        let too_large = || {
            GraphError::InvalidConfig(format!(
                "{} layers of {} nodes exceed the addressable graph size",
                self.layer_count, self.nodes_per_layer
            ))
        };
        let edges = self
            .layer_count
            .checked_mul(self.nodes_per_layer)
            .and_then(|nodes| nodes.checked_mul(MAX_OUT_DEGREE))
            .ok_or_else(too_large)?;
        match edges.checked_mul(std::mem::size_of::<Edge>()) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(edges),
            _ => Err(too_large()),
        }
    }
}
