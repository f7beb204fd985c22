//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.

use crate::preprocessing::error::PreprocessingError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Trait for unfitted transformers.
///
/// A transformer learns parameters from the historical dataset and can then
/// transform new data using those learned parameters. This trait represents
/// the configurable, unfitted state; fitting never mutates it.
pub trait Transformer: Clone {
    /// Input data type the transformer learns from.
    type Input: ?Sized;
    /// The corresponding fitted transformer type.
    type Fitted: FittedTransformer;

    /// Fit the transformer to the data, producing an immutable fitted state.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::EmptyData`] when the data holds no rows.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;
}

/// Trait for fitted transformers ready for inference.
///
/// A fitted transformer contains learned parameters (e.g. per-column mean and
/// standard deviation) and maps records to numeric features. It is immutable
/// for the life of the process; any dataset change requires a full re-fit.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
/// - `transform` is deterministic: identical input and identical fitted
///   state yield identical output.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: Serialize + DeserializeOwned;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::UnknownCategory`] for categorical values
    /// absent from the fitted vocabulary.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Width of the produced feature vector.
    fn n_features_out(&self) -> usize;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = bincode::serialize(&self.extract_params()).map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = bincode::deserialize(&bytes)
            .map_err(|e| PreprocessingError::Serialization(e.to_string()))?;
        Self::from_params(params)
    }
}
