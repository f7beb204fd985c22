//! Standard scaling (Z-score normalization) for one numeric column.
//!
//! The standard score of a value `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the historical values and `s` their population
//! standard deviation. A constant column (zero deviation) scales by 1 so the
//! transform stays defined.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Standard scaler for a single numeric column (unfitted).
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    pub fn new() -> Self {
        Self
    }
}

/// Serializable parameters of a fitted scaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of the historical values.
    pub mean: f64,
    /// Scale divisor: population standard deviation, or 1 for a constant column.
    pub scale: f64,
}

/// Fitted standard scaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: f64,
    scale: f64,
}

impl FittedStandardScaler {
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Standardize one value.
    pub fn transform_value(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }
}

impl Transformer for StandardScaler {
    type Input = [f64];
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &[f64]) -> Result<FittedStandardScaler, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "cannot fit StandardScaler on an empty column".to_string(),
            ));
        }

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        // population std (ddof=0)
        let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        let scale = if std == 0.0 { 1.0 } else { std };

        Ok(FittedStandardScaler { mean, scale })
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = [f64];
    type Output = Vec<f64>;
    type Params = StandardScalerParams;

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        Ok(data.iter().map(|&v| self.transform_value(v)).collect())
    }

    fn extract_params(&self) -> StandardScalerParams {
        StandardScalerParams {
            mean: self.mean,
            scale: self.scale,
        }
    }

    fn from_params(params: StandardScalerParams) -> Result<Self, PreprocessingError> {
        if !(params.scale.is_finite() && params.scale != 0.0) {
            return Err(PreprocessingError::Serialization(format!(
                "invalid scale {} in StandardScaler params",
                params.scale
            )));
        }
        Ok(Self {
            mean: params.mean,
            scale: params.scale,
        })
    }

    fn n_features_out(&self) -> usize {
        1
    }
}
