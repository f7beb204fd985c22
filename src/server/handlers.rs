//! Request handlers.

use crate::dataset::RentalRecord;
use crate::server::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Serve the query form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    /// Selected city; defaults to the first observed city.
    pub city: Option<String>,
}

/// Selection lists and input bounds for the form, filtered by city where the
/// vocabulary is city-dependent.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub cities: Vec<String>,
    pub city: String,
    pub area_types: Vec<String>,
    pub area_localities: Vec<String>,
    pub furnishing_statuses: Vec<String>,
    pub tenant_preferences: Vec<String>,
    pub contact_points: Vec<String>,
    pub bhk_min: u32,
    pub bhk_max: u32,
    pub size_min: f64,
    pub size_max: f64,
}

pub async fn options(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OptionsQuery>,
) -> Json<FormOptions> {
    let dataset = &state.dataset;
    let cities = dataset.cities();
    let city = query
        .city
        .filter(|c| cities.iter().any(|known| known == c))
        .or_else(|| cities.first().cloned())
        .unwrap_or_default();

    let (bhk_min, bhk_max) = dataset.bhk_range();
    let (size_min, size_max) = dataset.size_range();

    Json(FormOptions {
        area_types: dataset.area_types_for(&city),
        area_localities: dataset.localities_for(&city),
        furnishing_statuses: dataset.furnishing_statuses(),
        tenant_preferences: dataset.tenant_preferences(),
        contact_points: dataset.contact_points(),
        cities,
        city,
        bhk_min,
        bhk_max,
        size_min,
        size_max,
    })
}

/// Prediction response: the raw scalar plus its currency rendering.
#[derive(Debug, Serialize)]
pub struct Prediction {
    pub rent: f64,
    pub formatted: String,
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(record): Json<RentalRecord>,
) -> Result<Json<Prediction>, ApiError> {
    let rent = state.pipeline.predict(&record)?;
    info!(city = %record.city, bhk = record.bhk, rent, "prediction served");

    Ok(Json(Prediction {
        formatted: format_rent(rent),
        rent,
    }))
}

/// Format a rent estimate as currency, e.g. `₹12,345.67`.
pub fn format_rent(rent: f64) -> String {
    let rounded = (rent * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}₹{grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RentalDataset;
    use crate::model::LinearEstimator;
    use crate::pipeline::RentPipeline;
    use crate::preprocessing::{FeatureTransformer, FittedTransformer, Transformer};

    const SAMPLE: &str = "\
BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact
2,12000,900,2 out of 4,Super Area,Bandel,Kolkata,Semi-Furnished,Bachelors/Family,2,Contact Owner
1,8500,500,Ground out of 2,Carpet Area,Salt Lake,Kolkata,Unfurnished,Bachelors,1,Contact Owner
3,45000,1400,1 out of 3,Super Area,Powai,Mumbai,Furnished,Family,3,Contact Agent
";

    fn state() -> Arc<AppState> {
        let dataset = RentalDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let features = FeatureTransformer::new().fit(&dataset).unwrap();
        let estimator = LinearEstimator::new(vec![50.0; features.n_features_out()], 15_000.0);
        let pipeline = RentPipeline::new(features, estimator).unwrap();
        Arc::new(AppState {
            dataset: Arc::new(dataset),
            pipeline: Arc::new(pipeline),
        })
    }

    fn query_record() -> RentalRecord {
        RentalRecord {
            bhk: 2,
            size: 900.0,
            bathroom: 2,
            floor: 2,
            area_type: "Super Area".to_string(),
            area_locality: "Bandel".to_string(),
            city: "Kolkata".to_string(),
            furnishing_status: "Semi-Furnished".to_string(),
            tenant_preferred: "Bachelors/Family".to_string(),
            point_of_contact: "Contact Owner".to_string(),
        }
    }

    #[tokio::test]
    async fn test_options_defaults_to_first_city() {
        let response = options(State(state()), Query(OptionsQuery { city: None })).await;
        assert_eq!(response.0.city, "Kolkata");
        assert_eq!(response.0.cities, vec!["Kolkata", "Mumbai"]);
        assert_eq!(response.0.area_localities, vec!["Bandel", "Salt Lake"]);
    }

    #[tokio::test]
    async fn test_options_filters_by_city() {
        let query = OptionsQuery {
            city: Some("Mumbai".to_string()),
        };
        let response = options(State(state()), Query(query)).await;
        assert_eq!(response.0.area_localities, vec!["Powai"]);
        assert_eq!(response.0.area_types, vec!["Super Area"]);
        // City-independent lists stay complete.
        assert_eq!(response.0.furnishing_statuses.len(), 3);
    }

    #[tokio::test]
    async fn test_options_unknown_city_falls_back() {
        let query = OptionsQuery {
            city: Some("Atlantis".to_string()),
        };
        let response = options(State(state()), Query(query)).await;
        assert_eq!(response.0.city, "Kolkata");
    }

    #[tokio::test]
    async fn test_predict_returns_formatted_rent() {
        let state = state();
        let expected = state.pipeline.predict(&query_record()).unwrap();

        let response = predict(State(state), Json(query_record())).await.unwrap();
        assert_eq!(response.0.rent, expected);
        assert_eq!(response.0.formatted, format_rent(expected));
    }

    #[tokio::test]
    async fn test_predict_unknown_category_is_api_error() {
        let mut record = query_record();
        record.city = "Atlantis".to_string();
        let result = predict(State(state()), Json(record)).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_format_rent_groups_thousands() {
        assert_eq!(format_rent(12345.678), "₹12,345.68");
        assert_eq!(format_rent(1_000_000.0), "₹1,000,000.00");
        assert_eq!(format_rent(950.0), "₹950.00");
        assert_eq!(format_rent(0.0), "₹0.00");
    }

    #[test]
    fn test_format_rent_negative() {
        assert_eq!(format_rent(-1500.5), "-₹1,500.50");
    }

    #[test]
    fn test_state_estimator_width_matches() {
        let state = state();
        assert_eq!(
            state.pipeline.n_features(),
            state.pipeline.features().n_features_out()
        );
    }
}
