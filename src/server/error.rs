//! HTTP error mapping.

use crate::preprocessing::error::PreprocessingError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by API handlers. Per-query failures become displayable
/// 4xx responses; schema drift and artifact problems are server faults.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Preprocessing(inner) = self;

        let status = match &inner {
            PreprocessingError::InvalidValue { .. }
            | PreprocessingError::UnknownCategory { .. }
            | PreprocessingError::EmptyData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PreprocessingError::FeatureMismatch { .. }
            | PreprocessingError::Serialization(_)
            | PreprocessingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%inner, "prediction failed");
        } else {
            warn!(%inner, "query rejected");
        }

        (status, Json(json!({ "error": inner.to_string() }))).into_response()
    }
}
