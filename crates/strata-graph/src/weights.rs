//! Edge weight sampling.
//!
//! ```text
//! inter(L) = inter_base + |Normal(inter_mean, inter_std)| + inter_layer_slope * L
//! intra    = intra_base + |Normal(intra_mean, intra_std)|
//! ```
//!
//! Inter-layer costs rise with the source layer; intra-layer costs stay small
//! and model lateral, associative links.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{GraphError, Result};

/// Parameters of the weight sampling law.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightModel {
    pub inter_base: f64,
    pub inter_mean: f64,
    pub inter_std: f64,
    /// Added per source layer index
    pub inter_layer_slope: f64,
    pub intra_base: f64,
    pub intra_mean: f64,
    pub intra_std: f64,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self {
            inter_base: 1.0,
            inter_mean: 0.5,
            inter_std: 0.3,
            inter_layer_slope: 0.2,
            intra_base: 0.3,
            intra_mean: 0.1,
            intra_std: 0.05,
        }
    }
}

impl WeightModel {
    /// Bind the model to concrete distributions.
    pub(crate) fn sampler(&self) -> Result<WeightSampler> {
        let inter = Normal::new(self.inter_mean, self.inter_std)
            .map_err(|e| GraphError::Distribution(format!("inter-layer: {}", e)))?;
        let intra = Normal::new(self.intra_mean, self.intra_std)
            .map_err(|e| GraphError::Distribution(format!("intra-layer: {}", e)))?;
        Ok(WeightSampler {
            model: *self,
            inter,
            intra,
        })
    }
}

/// Draws edge weights from a [`WeightModel`].
///
/// Returned samples are not filtered; the caller decides what to store.
#[derive(Debug, Clone)]
pub(crate) struct WeightSampler {
    model: WeightModel,
    inter: Normal<f64>,
    intra: Normal<f64>,
}

impl WeightSampler {
    /// Weight of an edge leaving layer `layer` for layer `layer + 1`.
    pub fn inter<R: Rng + ?Sized>(&self, layer: usize, rng: &mut R) -> f64 {
        self.model.inter_base
            + self.inter.sample(rng).abs()
            + self.model.inter_layer_slope * layer as f64
    }

    /// Weight of an edge within one layer.
    pub fn intra<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.model.intra_base + self.intra.sample(rng).abs()
    }
}
