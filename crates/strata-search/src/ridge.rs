//! Ridge linear regression over pair features.
//!
//! Fits `y ≈ w · x + b` by solving the regularised normal equations
//!
//! ```text
//! | XᵀX + λI   Xᵀ1 | | w |   | Xᵀy |
//! | 1ᵀX        n   | | b | = | 1ᵀy |
//! ```
//!
//! The intercept is not penalised. With `λ > 0` the system is positive
//! definite for any non-empty sample.

use nalgebra::{DMatrix, DVector};
use tracing::info;

use crate::error::EstimateError;
use crate::estimator::{CostEstimator, TrainingSample, PAIR_FEATURES};

const DIM: usize = PAIR_FEATURES + 1;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    weights: [f64; PAIR_FEATURES],
    intercept: f64,
}

/// A linear cost model. `RidgeEstimator::default()` is unfitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RidgeEstimator {
    fitted: Option<Coefficients>,
}

impl RidgeEstimator {
    /// Fit the model with regularisation strength `lambda`.
    pub fn fit(samples: &[TrainingSample], lambda: f64) -> Result<Self, EstimateError> {
        if samples.is_empty() {
            return Err(EstimateError::Training("no training samples".into()));
        }
        if !(lambda.is_finite() && lambda >= 0.0) {
            return Err(EstimateError::Training(format!(
                "lambda must be finite and non-negative, got {}",
                lambda
            )));
        }

        let design = DMatrix::from_fn(samples.len(), DIM, |i, j| {
            samples[i].features.get(j).copied().unwrap_or(1.0)
        });
        let targets = DVector::from_iterator(samples.len(), samples.iter().map(|s| s.target));

        // Penalise the feature weights only; the last column is the intercept.
        let mut gram = design.tr_mul(&design);
        for i in 0..PAIR_FEATURES {
            gram[(i, i)] += lambda;
        }
        let rhs = design.tr_mul(&targets);

        let solution = gram
            .cholesky()
            .ok_or_else(|| EstimateError::Training("normal equations are not positive definite".into()))?
            .solve(&rhs);
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(EstimateError::Training("solution is not finite".into()));
        }

        let mut weights = [0.0; PAIR_FEATURES];
        weights.copy_from_slice(&solution.as_slice()[..PAIR_FEATURES]);
        let coefficients = Coefficients {
            weights,
            intercept: solution[PAIR_FEATURES],
        };

        info!(
            samples = samples.len(),
            lambda,
            intercept = coefficients.intercept,
            "fitted ridge cost estimator"
        );

        Ok(Self {
            fitted: Some(coefficients),
        })
    }

    /// A model with fixed coefficients.
    pub fn from_coefficients(weights: [f64; PAIR_FEATURES], intercept: f64) -> Self {
        Self {
            fitted: Some(Coefficients { weights, intercept }),
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Feature weights and intercept, if fitted.
    pub fn coefficients(&self) -> Option<([f64; PAIR_FEATURES], f64)> {
        self.fitted.map(|c| (c.weights, c.intercept))
    }

    /// Mean squared error over `samples`.
    pub fn mean_squared_error(&self, samples: &[TrainingSample]) -> Result<f64, EstimateError> {
        if samples.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for sample in samples {
            let err = self.estimate(&sample.features)? - sample.target;
            total += err * err;
        }
        Ok(total / samples.len() as f64)
    }
}

impl CostEstimator for RidgeEstimator {
    fn estimate(&self, features: &[f64]) -> Result<f64, EstimateError> {
        let c = self.fitted.as_ref().ok_or(EstimateError::NotFitted)?;
        if features.len() != PAIR_FEATURES {
            return Err(EstimateError::FeatureShape {
                expected: PAIR_FEATURES,
                actual: features.len(),
            });
        }
        let value = c
            .weights
            .iter()
            .zip(features)
            .fold(c.intercept, |acc, (w, x)| acc + w * x);
        if !value.is_finite() {
            return Err(EstimateError::NonFinite { value });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn linear_samples(count: usize, seed: u64) -> Vec<TrainingSample> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut features = [0.0; PAIR_FEATURES];
                for f in features.iter_mut() {
                    *f = rng.gen_range(-10.0..10.0);
                }
                let target = 2.0 * features[0] - features[3] + 0.5 * features[5] + 1.0;
                TrainingSample { features, target }
            })
            .collect()
    }

    #[test]
    fn unfitted_model_fails() {
        let model = RidgeEstimator::default();
        assert!(!model.is_fitted());
        assert_eq!(model.estimate(&[0.0; 6]), Err(EstimateError::NotFitted));
    }

    #[test]
    fn recovers_linear_target() {
        let samples = linear_samples(200, 3);
        let model = RidgeEstimator::fit(&samples, 1e-9).unwrap();
        let (weights, intercept) = model.coefficients().unwrap();

        let expected = [2.0, 0.0, 0.0, -1.0, 0.0, 0.5];
        for (w, e) in weights.iter().zip(expected) {
            assert!((w - e).abs() < 1e-6, "weights {:?}", weights);
        }
        assert!((intercept - 1.0).abs() < 1e-6);
        assert!(model.mean_squared_error(&samples).unwrap() < 1e-10);
    }

    #[test]
    fn shrinkage_grows_with_lambda() {
        let samples = linear_samples(50, 9);
        let loose = RidgeEstimator::fit(&samples, 0.0).unwrap();
        let tight = RidgeEstimator::fit(&samples, 1e6).unwrap();
        let norm = |m: &RidgeEstimator| {
            let (w, _) = m.coefficients().unwrap();
            w.iter().map(|v| v * v).sum::<f64>()
        };
        assert!(norm(&tight) < norm(&loose));
    }

    #[test]
    fn empty_sample_rejected() {
        assert!(matches!(
            RidgeEstimator::fit(&[], 1.0),
            Err(EstimateError::Training(_))
        ));
    }

    #[test]
    fn invalid_lambda_rejected() {
        let samples = linear_samples(10, 1);
        assert!(RidgeEstimator::fit(&samples, -1.0).is_err());
        assert!(RidgeEstimator::fit(&samples, f64::NAN).is_err());
    }

    #[test]
    fn collinear_features_without_penalty_are_singular() {
        // Every feature is zero: only the intercept is identifiable.
        let samples = vec![
            TrainingSample { features: [0.0; 6], target: 1.0 },
            TrainingSample { features: [0.0; 6], target: 3.0 },
        ];
        assert!(matches!(
            RidgeEstimator::fit(&samples, 0.0),
            Err(EstimateError::Training(_))
        ));

        // Any penalty makes it solvable; the intercept is the mean.
        let model = RidgeEstimator::fit(&samples, 0.1).unwrap();
        let (_, intercept) = model.coefficients().unwrap();
        assert!((intercept - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_targets_rejected() {
        let mut samples = linear_samples(20, 4);
        samples[3].target = f64::INFINITY;
        assert!(matches!(
            RidgeEstimator::fit(&samples, 1e-3),
            Err(EstimateError::Training(_))
        ));
    }

    #[test]
    fn wrong_shape_rejected() {
        let model = RidgeEstimator::from_coefficients([1.0; 6], 0.0);
        assert_eq!(
            model.estimate(&[1.0; 7]),
            Err(EstimateError::FeatureShape { expected: 6, actual: 7 })
        );
    }

    #[test]
    fn overflow_reported_as_non_finite() {
        let model = RidgeEstimator::from_coefficients([f64::MAX; 6], 0.0);
        assert!(matches!(
            model.estimate(&[f64::MAX; 6]),
            Err(EstimateError::NonFinite { .. })
        ));
    }
}
