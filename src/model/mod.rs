//! Estimator artifacts.
//!
//! The estimator is treated as opaque: trained and serialized elsewhere,
//! loaded once at startup, and exposed solely through [`Estimator::predict`].

pub mod linear;

pub use linear::{LinearEstimator, LinearEstimatorParams};

/// A trained regression estimator mapping a feature vector to a scalar rent
/// prediction.
pub trait Estimator {
    /// Input dimensionality the estimator was trained against.
    fn n_features(&self) -> usize;

    /// Predict on a single feature vector of width `n_features`.
    fn predict(&self, features: &[f64]) -> f64;

    /// Predict on a batch of feature vectors.
    fn predict_batch(&self, features: &[Vec<f64>]) -> Vec<f64> {
        features.iter().map(|row| self.predict(row)).collect()
    }
}
