//! Prediction pipeline combining preprocessing and estimator inference.
//!
//! The pipeline composes the fitted feature transformer with the loaded
//! estimator artifact and exposes one operation: `predict(record) -> f64`.
//! It owns no mutable state; the same record against the same fitted state
//! always yields the same prediction.
//!
//! The transformer is re-fitted from the dataset at every process start while
//! the estimator is trained offline, so the two can drift apart. The width of
//! the rebuilt feature schema is therefore checked against the estimator at
//! assembly, and again on every transform, rather than coerced.

use crate::dataset::RentalRecord;
use crate::model::Estimator;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::features::FittedFeatureTransformer;
use crate::preprocessing::traits::FittedTransformer;

/// Validate the input contract of a query record: positive finite size and a
/// floor level no lower than a lower basement.
fn validate_record(record: &RentalRecord) -> Result<(), PreprocessingError> {
    if !(record.size.is_finite() && record.size > 0.0) {
        return Err(PreprocessingError::InvalidValue {
            column: "Size",
            message: format!("expected a positive number, got {}", record.size),
        });
    }
    if record.floor < -1 {
        return Err(PreprocessingError::InvalidValue {
            column: "Floor",
            message: format!("expected a level of -1 or above, got {}", record.floor),
        });
    }
    Ok(())
}

/// The assembled prediction pipeline: fitted transformer + estimator.
///
/// Immutable after construction and safe to share across sessions by
/// reference; no write path exists after startup.
pub struct RentPipeline<E: Estimator> {
    features: FittedFeatureTransformer,
    estimator: E,
}

impl<E: Estimator> RentPipeline<E> {
    /// Assemble the pipeline, failing fast when the estimator was trained
    /// against a different feature width than the transformer produces.
    pub fn new(
        features: FittedFeatureTransformer,
        estimator: E,
    ) -> Result<Self, PreprocessingError> {
        if estimator.n_features() != features.n_features_out() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: estimator.n_features(),
                got_features: features.n_features_out(),
            });
        }
        Ok(Self {
            features,
            estimator,
        })
    }

    /// Width of the feature schema shared by transformer and estimator.
    pub fn n_features(&self) -> usize {
        self.features.n_features_out()
    }

    /// The fitted transformer backing this pipeline.
    pub fn features(&self) -> &FittedFeatureTransformer {
        &self.features
    }

    /// Predict the monthly rent for one record.
    ///
    /// # Errors
    /// - [`PreprocessingError::InvalidValue`] when the record violates the
    ///   input contract
    /// - [`PreprocessingError::UnknownCategory`] when a categorical value was
    ///   never observed during fitting
    /// - [`PreprocessingError::FeatureMismatch`] on estimator/transformer
    ///   schema drift
    pub fn predict(&self, record: &RentalRecord) -> Result<f64, PreprocessingError> {
        validate_record(record)?;

        let features = self.features.transform(record)?;
        if features.len() != self.estimator.n_features() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.estimator.n_features(),
                got_features: features.len(),
            });
        }

        Ok(self.estimator.predict(&features))
    }
}
