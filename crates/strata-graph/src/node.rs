//! Graph nodes.

use crate::Position;

/// Dense index of a node, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn value(&self) -> usize {
        self.0
    }
}

/// A node on one layer's ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Stable string id, e.g. `P0_N3`
    pub id: String,
    /// Layer index in `[0, layer_count)`
    pub layer: usize,
    /// Position on the ring, `0..nodes_per_layer`
    pub slot: usize,
    /// Label of `layer`
    pub label: String,
    pub position: Position,
}

/// Build the id of the node at `slot` on `layer`.
///
/// The id is the label's first character, the layer index and the slot:
/// `node_id("Physical", 0, 3) == "P0_N3"`.
pub fn node_id(label: &str, layer: usize, slot: usize) -> String {
    let initial = label.trim().chars().next().unwrap_or('?');
    format!("{}{}_N{}", initial, layer, slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_format() {
        assert_eq!(node_id("Physical", 0, 0), "P0_N0");
        assert_eq!(node_id("Goal", 4, 5), "G4_N5");
        assert_eq!(node_id(" semantic", 2, 11), "s2_N11");
    }

    #[test]
    fn ids_unique_across_layers_with_same_initial() {
        // Layer index disambiguates labels sharing an initial.
        assert_ne!(node_id("Decision", 3, 0), node_id("Data", 5, 0));
    }
}
