//! The linear regression estimator artifact.
//!
//! The estimator is trained and serialized elsewhere; this process only loads
//! it and runs inference: `y = w^T x + b`. The artifact carries plain
//! numerical parameters (weights and bias) serialized with `bincode`, so it
//! stays opaque to everything except the prediction call.

use crate::model::Estimator;
use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable parameters of the linear estimator: one weight per feature
/// column plus an intercept.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinearEstimatorParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// A loaded linear regression estimator, immutable after construction.
#[derive(Clone, Debug)]
pub struct LinearEstimator {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearEstimator {
    /// Construct an estimator from explicit parameters (e.g. for tests or a
    /// warm start).
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> LinearEstimatorParams {
        LinearEstimatorParams {
            weights: self.weights.clone(),
            bias: self.bias,
        }
    }

    /// Reconstruct an estimator from parameters.
    pub fn from_params(params: LinearEstimatorParams) -> Result<Self, PreprocessingError> {
        if params.weights.is_empty() {
            return Err(PreprocessingError::Serialization(
                "estimator artifact carries no weights".to_string(),
            ));
        }
        if !params.weights.iter().chain([&params.bias]).all(|w| w.is_finite()) {
            return Err(PreprocessingError::Serialization(
                "estimator artifact carries non-finite parameters".to_string(),
            ));
        }
        Ok(Self::new(params.weights, params.bias))
    }

    /// Save the estimator artifact to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = bincode::serialize(&self.extract_params()).map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load the estimator artifact from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let bytes = std::fs::read(path)?;
        let params: LinearEstimatorParams = bincode::deserialize(&bytes)
            .map_err(|e| PreprocessingError::Serialization(e.to_string()))?;
        Self::from_params(params)
    }
}

impl Estimator for LinearEstimator {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Predict on a single feature vector. The caller guarantees the width
    /// matches `n_features`; the pipeline enforces this before dispatch.
    fn predict(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_single() {
        let model = LinearEstimator::new(vec![2.0, 3.0], 1.0);
        // y = 2*1 + 3*2 + 1 = 9
        assert_eq!(model.predict(&[1.0, 2.0]), 9.0);
    }

    #[test]
    fn test_predict_negative_weights() {
        let model = LinearEstimator::new(vec![-1.0, -2.0], 5.0);
        assert_eq!(model.predict(&[1.0, 1.0]), 2.0);
    }

    #[test]
    fn test_predict_batch() {
        let model = LinearEstimator::new(vec![1.0, 2.0], 3.0);
        let batch = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        assert_eq!(model.predict_batch(&batch), vec![6.0, 9.0]);
    }

    #[test]
    fn test_n_features() {
        let model = LinearEstimator::new(vec![0.0; 19], 0.0);
        assert_eq!(model.n_features(), 19);
    }

    #[test]
    fn test_params_roundtrip() {
        let model = LinearEstimator::new(vec![0.1, 0.2, 0.3], 0.05);
        let restored = LinearEstimator::from_params(model.extract_params()).unwrap();
        assert_eq!(restored.predict(&[1.0, 1.0, 1.0]), model.predict(&[1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_empty_weights_rejected() {
        let params = LinearEstimatorParams {
            weights: vec![],
            bias: 0.0,
        };
        assert!(matches!(
            LinearEstimator::from_params(params),
            Err(PreprocessingError::Serialization(_))
        ));
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        let params = LinearEstimatorParams {
            weights: vec![1.0, f64::NAN],
            bias: 0.0,
        };
        assert!(LinearEstimator::from_params(params).is_err());
    }

    #[test]
    fn test_save_load_file() {
        let model = LinearEstimator::new(vec![1.0, 2.0, 3.0], 0.5);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        model.save_to_file(&path).unwrap();

        let loaded = LinearEstimator::load_from_file(&path).unwrap();
        assert_eq!(loaded.extract_params().weights, vec![1.0, 2.0, 3.0]);
        assert_eq!(loaded.extract_params().bias, 0.5);
    }

    #[test]
    fn test_missing_artifact_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LinearEstimator::load_from_file(dir.path().join("absent.bin"));
        assert!(matches!(result, Err(PreprocessingError::Io(_))));
    }
}
