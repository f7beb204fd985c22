//! HTTP serving surface.
//!
//! One form page plus two JSON endpoints over the shared immutable state:
//!
//! - `GET /` — the query form
//! - `GET /api/options` — selection lists (city-dependent and independent)
//!   and numeric input bounds
//! - `POST /api/predict` — one fully-populated record in, the formatted rent
//!   estimate out
//!
//! The dataset and pipeline are fitted before the server starts and never
//! mutated afterwards, so handlers share them through `Arc` without locking.

use crate::dataset::RentalDataset;
use crate::model::LinearEstimator;
use crate::pipeline::RentPipeline;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Shared immutable application state.
pub struct AppState {
    pub dataset: Arc<RentalDataset>,
    pub pipeline: Arc<RentPipeline<LinearEstimator>>,
}

/// Build the application router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/options", get(handlers::options))
        .route("/api/predict", post(handlers::predict))
        .with_state(state)
}
