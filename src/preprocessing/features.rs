//! The feature transformer: per-column preprocessing composed over a record.
//!
//! Counterpart of a column transformer: standard scaling for the four numeric
//! columns and one-hot expansion for the six categorical columns, producing
//! one flat feature vector per record. Column order is fixed and is part of
//! the contract with the estimator artifact:
//!
//! ```text
//! [BHK, Size, Bathroom, Floor]  standardized, then
//! [Area Type | Area Locality | City | Furnishing Status |
//!  Tenant Preferred | Point of Contact]  one-hot blocks
//! ```

use crate::dataset::{RentalDataset, RentalRecord};
use crate::preprocessing::encoding::{FittedOneHotEncoder, OneHotEncoder, OneHotEncoderParams};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::scaling::{FittedStandardScaler, StandardScaler, StandardScalerParams};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};

/// Numeric columns, in feature-vector order.
pub const NUMERIC_COLUMNS: [&str; 4] = ["BHK", "Size", "Bathroom", "Floor"];

/// Categorical columns, in feature-vector order.
pub const CATEGORICAL_COLUMNS: [&str; 6] = [
    "Area Type",
    "Area Locality",
    "City",
    "Furnishing Status",
    "Tenant Preferred",
    "Point of Contact",
];

fn numeric_value(record: &RentalRecord, column: usize) -> f64 {
    match column {
        0 => f64::from(record.bhk),
        1 => record.size,
        2 => f64::from(record.bathroom),
        3 => f64::from(record.floor),
        _ => unreachable!("numeric column index out of range"),
    }
}

fn categorical_value(record: &RentalRecord, column: usize) -> &str {
    match column {
        0 => &record.area_type,
        1 => &record.area_locality,
        2 => &record.city,
        3 => &record.furnishing_status,
        4 => &record.tenant_preferred,
        5 => &record.point_of_contact,
        _ => unreachable!("categorical column index out of range"),
    }
}

/// Unfitted feature transformer.
#[derive(Clone, Debug, Default)]
pub struct FeatureTransformer;

impl FeatureTransformer {
    pub fn new() -> Self {
        Self
    }
}

/// Serializable parameters of a fitted feature transformer. Persisting this
/// alongside the estimator artifact pins the feature schema the estimator was
/// trained against.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureTransformerParams {
    pub scalers: Vec<StandardScalerParams>,
    pub encoders: Vec<OneHotEncoderParams>,
}

/// Fitted feature transformer, immutable for the life of the process.
#[derive(Clone, Debug)]
pub struct FittedFeatureTransformer {
    /// Index-aligned with [`NUMERIC_COLUMNS`].
    scalers: Vec<FittedStandardScaler>,
    /// Index-aligned with [`CATEGORICAL_COLUMNS`].
    encoders: Vec<FittedOneHotEncoder>,
    n_features_out: usize,
}

impl FittedFeatureTransformer {
    /// The fitted vocabulary of one categorical column.
    pub fn vocabulary(&self, column: &str) -> Option<&[String]> {
        let idx = CATEGORICAL_COLUMNS.iter().position(|c| *c == column)?;
        Some(self.encoders[idx].vocabulary())
    }

    /// Transform a batch of records into a feature matrix.
    pub fn transform_batch(
        &self,
        records: &[RentalRecord],
    ) -> Result<Vec<Vec<f64>>, PreprocessingError> {
        records.iter().map(|r| self.transform(r)).collect()
    }
}

impl Transformer for FeatureTransformer {
    type Input = RentalDataset;
    type Fitted = FittedFeatureTransformer;

    fn fit(&self, data: &RentalDataset) -> Result<FittedFeatureTransformer, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "cannot fit FeatureTransformer on an empty dataset".to_string(),
            ));
        }

        let mut scalers = Vec::with_capacity(NUMERIC_COLUMNS.len());
        for column in 0..NUMERIC_COLUMNS.len() {
            let values: Vec<f64> = data.records().map(|r| numeric_value(r, column)).collect();
            scalers.push(StandardScaler::new().fit(&values)?);
        }

        let mut encoders = Vec::with_capacity(CATEGORICAL_COLUMNS.len());
        for (column, name) in CATEGORICAL_COLUMNS.iter().copied().enumerate() {
            let values: Vec<String> = data
                .records()
                .map(|r| categorical_value(r, column).to_string())
                .collect();
            encoders.push(OneHotEncoder::new(name).fit(&values)?);
        }

        let n_features_out =
            scalers.len() + encoders.iter().map(|e| e.n_features_out()).sum::<usize>();

        Ok(FittedFeatureTransformer {
            scalers,
            encoders,
            n_features_out,
        })
    }
}

impl FittedTransformer for FittedFeatureTransformer {
    type Input = RentalRecord;
    type Output = Vec<f64>;
    type Params = FeatureTransformerParams;

    fn transform(&self, record: &RentalRecord) -> Result<Vec<f64>, PreprocessingError> {
        let mut features = Vec::with_capacity(self.n_features_out);

        for (column, scaler) in self.scalers.iter().enumerate() {
            features.push(scaler.transform_value(numeric_value(record, column)));
        }
        for (column, encoder) in self.encoders.iter().enumerate() {
            encoder.encode_into(categorical_value(record, column), &mut features)?;
        }

        Ok(features)
    }

    fn extract_params(&self) -> FeatureTransformerParams {
        FeatureTransformerParams {
            scalers: self.scalers.iter().map(|s| s.extract_params()).collect(),
            encoders: self.encoders.iter().map(|e| e.extract_params()).collect(),
        }
    }

    fn from_params(params: FeatureTransformerParams) -> Result<Self, PreprocessingError> {
        if params.scalers.len() != NUMERIC_COLUMNS.len()
            || params.encoders.len() != CATEGORICAL_COLUMNS.len()
        {
            return Err(PreprocessingError::Serialization(format!(
                "expected {} scalers and {} encoders, got {} and {}",
                NUMERIC_COLUMNS.len(),
                CATEGORICAL_COLUMNS.len(),
                params.scalers.len(),
                params.encoders.len()
            )));
        }

        let scalers = params
            .scalers
            .into_iter()
            .map(FittedStandardScaler::from_params)
            .collect::<Result<Vec<_>, _>>()?;
        let encoders = params
            .encoders
            .into_iter()
            .map(FittedOneHotEncoder::from_params)
            .collect::<Result<Vec<_>, _>>()?;

        let n_features_out =
            scalers.len() + encoders.iter().map(|e| e.n_features_out()).sum::<usize>();

        Ok(Self {
            scalers,
            encoders,
            n_features_out,
        })
    }

    fn n_features_out(&self) -> usize {
        self.n_features_out
    }
}
