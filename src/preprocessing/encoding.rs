//! One-hot encoding for one categorical column.
//!
//! The encoder learns the vocabulary (unique values, sorted) of a column
//! during fitting and maps a value to a binary indicator vector over that
//! vocabulary.
//!
//! ```text
//! vocabulary: ["Carpet Area", "Super Area"]
//! "Super Area"  -> [0, 1]
//! "Carpet Area" -> [1, 0]
//! ```
//!
//! A value absent from the vocabulary is rejected with
//! [`PreprocessingError::UnknownCategory`]. An all-zero vector would be a
//! syntactically valid input to the estimator, so silently emitting one
//! turns a vocabulary gap into an undiagnosed misprediction.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One-hot encoder for a single categorical column (unfitted).
#[derive(Clone, Debug)]
pub struct OneHotEncoder {
    /// Column name, carried into error messages.
    column: &'static str,
}

impl OneHotEncoder {
    pub fn new(column: &'static str) -> Self {
        Self { column }
    }
}

/// Serializable parameters of a fitted encoder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OneHotEncoderParams {
    pub column: String,
    /// Sorted vocabulary observed during fitting.
    pub vocabulary: Vec<String>,
}

/// Fitted one-hot encoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedOneHotEncoder {
    column: &'static str,
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
}

impl FittedOneHotEncoder {
    /// The fitted vocabulary, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    fn build(column: &'static str, vocabulary: Vec<String>) -> Self {
        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self {
            column,
            vocabulary,
            index,
        }
    }

    /// Append the indicator vector for `value` onto `out`.
    pub fn encode_into(&self, value: &str, out: &mut Vec<f64>) -> Result<(), PreprocessingError> {
        let position =
            self.index
                .get(value)
                .ok_or_else(|| PreprocessingError::UnknownCategory {
                    column: self.column,
                    value: value.to_string(),
                })?;

        let start = out.len();
        out.resize(start + self.vocabulary.len(), 0.0);
        out[start + position] = 1.0;
        Ok(())
    }
}

impl Transformer for OneHotEncoder {
    type Input = [String];
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &[String]) -> Result<FittedOneHotEncoder, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(format!(
                "cannot fit OneHotEncoder for column {} on empty data",
                self.column
            )));
        }

        let mut vocabulary: Vec<String> = data.to_vec();
        vocabulary.sort();
        vocabulary.dedup();

        Ok(FittedOneHotEncoder::build(self.column, vocabulary))
    }
}

impl FittedTransformer for FittedOneHotEncoder {
    type Input = str;
    type Output = Vec<f64>;
    type Params = OneHotEncoderParams;

    fn transform(&self, value: &str) -> Result<Vec<f64>, PreprocessingError> {
        let mut out = Vec::with_capacity(self.vocabulary.len());
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    fn extract_params(&self) -> OneHotEncoderParams {
        OneHotEncoderParams {
            column: self.column.to_string(),
            vocabulary: self.vocabulary.clone(),
        }
    }

    fn from_params(params: OneHotEncoderParams) -> Result<Self, PreprocessingError> {
        let column = super::features::CATEGORICAL_COLUMNS
            .iter()
            .copied()
            .find(|c| *c == params.column)
            .ok_or_else(|| {
                PreprocessingError::Serialization(format!(
                    "unknown categorical column {:?} in encoder params",
                    params.column
                ))
            })?;

        if params.vocabulary.is_empty() {
            return Err(PreprocessingError::Serialization(format!(
                "empty vocabulary for column {column} in encoder params"
            )));
        }

        Ok(Self::build(column, params.vocabulary))
    }

    fn n_features_out(&self) -> usize {
        self.vocabulary.len()
    }
}
