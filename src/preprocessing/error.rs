//! Error types for preprocessing and prediction operations.

use thiserror::Error;

/// Error type for preprocessing and prediction operations.
///
/// Startup fitting errors (`EmptyData`) abort initialization; the remaining
/// variants occur per query and are reported back to the caller rather than
/// tearing the session down.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// Empty data provided where non-empty was required.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// A query field violates the input contract (e.g. non-positive size).
    #[error("invalid value for {column}: {message}")]
    InvalidValue {
        column: &'static str,
        message: String,
    },

    /// A categorical value absent from the fitted vocabulary. Surfaced
    /// instead of encoding a silent all-zero vector, which would produce a
    /// misleading prediction without diagnosis.
    #[error("unknown category {value:?} for column {column}")]
    UnknownCategory {
        column: &'static str,
        value: String,
    },

    /// Feature width disagreement between fitted state and its consumer,
    /// typically the estimator artifact having been trained against a
    /// different feature schema than the one rebuilt at startup.
    #[error("feature width mismatch: expected {expected_features}, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },

    /// Fitted-parameter (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during artifact file operations.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = PreprocessingError::UnknownCategory {
            column: "City",
            value: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "unknown category \"Atlantis\" for column City");
    }

    #[test]
    fn test_feature_mismatch_display() {
        let err = PreprocessingError::FeatureMismatch {
            expected_features: 12,
            got_features: 10,
        };
        assert!(err.to_string().contains("expected 12, got 10"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PreprocessingError = io_err.into();
        assert!(matches!(err, PreprocessingError::Io(_)));
    }
}
