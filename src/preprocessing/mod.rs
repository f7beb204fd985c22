//! Feature preprocessing transformers.
//!
//! This module converts raw rental records into numeric feature vectors
//! suitable for the regression estimator, following a fitted/unfitted
//! type-state split.
//!
//! # Design Philosophy
//!
//! - **Type Safety**: fitting consumes an unfitted transformer and produces a
//!   distinct fitted type, so inference cannot run against unfitted state.
//! - **Immutability**: fitted state never changes after construction; any
//!   dataset change requires a full re-fit.
//! - **Serializable**: fitted transformers extract to plain parameter structs
//!   that round-trip through `bincode`.
//!
//! # Core Traits
//!
//! - [`Transformer`]: unfitted transformer that learns from data
//! - [`FittedTransformer`]: fitted transformer ready for inference
//!
//! # Available Transformers
//!
//! - [`StandardScaler`]: Z-score normalization of one numeric column
//! - [`OneHotEncoder`]: indicator expansion of one categorical column
//! - [`FeatureTransformer`]: both composed over a whole [`RentalRecord`]
//!
//! [`RentalRecord`]: crate::dataset::RentalRecord

pub mod encoding;
pub mod error;
pub mod features;
pub mod scaling;
pub mod traits;

pub use encoding::{FittedOneHotEncoder, OneHotEncoder, OneHotEncoderParams};
pub use error::PreprocessingError;
pub use features::{
    FeatureTransformer, FeatureTransformerParams, FittedFeatureTransformer, CATEGORICAL_COLUMNS,
    NUMERIC_COLUMNS,
};
pub use scaling::{FittedStandardScaler, StandardScaler, StandardScalerParams};
pub use traits::{FittedTransformer, Transformer};
