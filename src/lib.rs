//! # rent-estimator
//!
//! A small interactive rent estimator: given the structured attributes of a
//! rental property, it predicts the monthly rent using a pre-trained linear
//! regression artifact and exposes the prediction through a form-based web UI.
//!
//! ## Core Design Principles
//!
//! - **Fit Once, Read Many**: the historical dataset is loaded and the feature
//!   transformer fitted exactly once at startup; everything downstream holds
//!   the fitted state immutably and shares it freely across requests.
//! - **Stateful Type Safety**: transformers carry their training state in the
//!   type system (`FeatureTransformer` vs `FittedFeatureTransformer`), so an
//!   unfitted transformer cannot be asked to encode a record.
//! - **Explicit Failure**: a query carrying a category the transformer never
//!   saw during fitting is rejected with an error rather than silently
//!   zero-vectored, and a width disagreement between the transformer output
//!   and the estimator weights is surfaced instead of coerced.
//!
//! ## Module Structure
//!
//! - `dataset` — CSV ingestion of historical rental records and floor-level
//!   normalization
//! - `preprocessing` — standardization and one-hot encoding with a
//!   fitted/unfitted type split
//! - `model` — the loaded estimator artifact (linear weights + bias)
//! - `pipeline` — transformer + estimator composed into `predict(record)`
//! - `server` — axum HTTP surface: form page, option lists, predict endpoint

/// Historical dataset loading and the rental record data model.
pub mod dataset;

/// The pre-trained estimator artifact.
pub mod model;

/// Prediction pipeline combining preprocessing and the estimator.
pub mod pipeline;

/// Feature preprocessing transformers.
pub mod preprocessing;

/// HTTP serving surface.
pub mod server;

pub use dataset::{DataError, RentalDataset, RentalRecord};
pub use model::{Estimator, LinearEstimator};
pub use pipeline::RentPipeline;
pub use preprocessing::{
    FeatureTransformer, FittedFeatureTransformer, FittedTransformer, PreprocessingError,
    Transformer,
};
