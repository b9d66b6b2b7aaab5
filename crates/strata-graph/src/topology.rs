//! Ring placement and neighbor computation.
//!
//! Every node at ring slot `i` has:
//! - 2 inter-layer targets on the next layer: slots `i` and `i + 1`
//! - 2 intra-layer targets on its own layer: slots `i + 1` and `i + 2`
//!
//! All slot arithmetic wraps modulo the ring size, so rings of one or two
//! nodes produce self-loops and repeated targets.

use std::f64::consts::TAU;

use crate::{Position, BASE_RADIUS, INTER_CONNECTIONS, INTRA_CONNECTIONS, LAYER_SPACING, LAYER_TWIST};

/// Slots on layer `L + 1` reached from slot `slot` on layer `L`.
pub fn inter_targets(slot: usize, ring_size: usize) -> [usize; INTER_CONNECTIONS] {
    [slot % ring_size, (slot + 1) % ring_size]
}

/// Slots on the same layer reached from slot `slot`.
pub fn intra_targets(slot: usize, ring_size: usize) -> [usize; INTRA_CONNECTIONS] {
    [(slot + 1) % ring_size, (slot + 2) % ring_size]
}

/// Position of slot `slot` on layer `layer`.
///
/// A `layer_count` of zero has no defined radius and yields NaN `x`/`y`.
pub fn ring_position(layer: usize, slot: usize, layer_count: usize, ring_size: usize) -> Position {
    let radius = BASE_RADIUS * (1.0 + layer as f64 / layer_count as f64);
    let angle = TAU * slot as f64 / ring_size as f64 + LAYER_TWIST * layer as f64;
    Position::new(
        radius * angle.cos(),
        radius * angle.sin(),
        LAYER_SPACING * layer as f64,
    )
}
