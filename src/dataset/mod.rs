//! Historical rental dataset loading.
//!
//! This module reads the tabular dataset of historical rental records into
//! memory at process start and normalizes the one derived field (floor level).
//! The loaded [`RentalDataset`] serves two consumers:
//!
//! - the feature transformer, which is fitted against the full dataset, and
//! - the presentation layer, which populates its selection lists from the
//!   observed vocabularies (area types and localities filtered per city).
//!
//! # Example
//!
//! ```ignore
//! use rent_estimator::dataset::RentalDataset;
//!
//! let dataset = RentalDataset::from_csv("House_Rent_Dataset.csv")?;
//! let cities = dataset.cities();
//! let localities = dataset.localities_for(&cities[0]);
//! ```

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub mod floor;
pub use floor::parse_floor_level;

/// Errors raised while loading the historical dataset. All of these are fatal
/// at startup; there is no meaningful partial dataset to continue with.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset record: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset contains no rows")]
    Empty,

    #[error("row {row}: unrecognized floor descriptor {descriptor:?}")]
    UnrecognizedFloor { row: usize, descriptor: String },

    #[error("row {row}: invalid {column}: {message}")]
    InvalidField {
        row: usize,
        column: &'static str,
        message: String,
    },
}

/// One rental property, as submitted by a query or observed historically.
///
/// Numeric counts are unsigned by construction; the floor level is the
/// derived integer form (see [`floor::parse_floor_level`]), never the raw
/// descriptor. Field names double as the JSON contract of the predict
/// endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Bedroom/hall/kitchen count.
    pub bhk: u32,
    /// Size in square feet.
    pub size: f64,
    /// Bathroom count.
    pub bathroom: u32,
    /// Derived floor level (-1 for lower basement, 0 for ground/upper).
    pub floor: i32,
    pub area_type: String,
    pub area_locality: String,
    pub city: String,
    pub furnishing_status: String,
    pub tenant_preferred: String,
    pub point_of_contact: String,
}

/// A historical observation: a record together with its known rent.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoricalRow {
    pub record: RentalRecord,
    pub rent: f64,
}

/// Raw CSV row shape. Column names follow the source file; columns not listed
/// here (e.g. `Posted On`) are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "BHK")]
    bhk: u32,
    #[serde(rename = "Rent")]
    rent: f64,
    #[serde(rename = "Size")]
    size: f64,
    #[serde(rename = "Floor")]
    floor: String,
    #[serde(rename = "Area Type")]
    area_type: String,
    #[serde(rename = "Area Locality")]
    area_locality: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Furnishing Status")]
    furnishing_status: String,
    #[serde(rename = "Tenant Preferred")]
    tenant_preferred: String,
    #[serde(rename = "Bathroom")]
    bathroom: u32,
    #[serde(rename = "Point of Contact")]
    point_of_contact: String,
}

/// The in-memory historical dataset, loaded once at startup and immutable
/// thereafter.
#[derive(Clone, Debug)]
pub struct RentalDataset {
    rows: Vec<HistoricalRow>,
}

impl RentalDataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Load the dataset from any reader producing CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
            let row = idx + 1; // 1-based data row, for messages
            let raw = result?;

            let floor = parse_floor_level(&raw.floor).ok_or_else(|| {
                DataError::UnrecognizedFloor {
                    row,
                    descriptor: raw.floor.clone(),
                }
            })?;

            if !(raw.size.is_finite() && raw.size > 0.0) {
                return Err(DataError::InvalidField {
                    row,
                    column: "Size",
                    message: format!("expected a positive number, got {}", raw.size),
                });
            }
            if !(raw.rent.is_finite() && raw.rent > 0.0) {
                return Err(DataError::InvalidField {
                    row,
                    column: "Rent",
                    message: format!("expected a positive number, got {}", raw.rent),
                });
            }

            rows.push(HistoricalRow {
                record: RentalRecord {
                    bhk: raw.bhk,
                    size: raw.size,
                    bathroom: raw.bathroom,
                    floor,
                    area_type: raw.area_type,
                    area_locality: raw.area_locality,
                    city: raw.city,
                    furnishing_status: raw.furnishing_status,
                    tenant_preferred: raw.tenant_preferred,
                    point_of_contact: raw.point_of_contact,
                },
                rent: raw.rent,
            });
        }

        if rows.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(Self { rows })
    }

    /// All historical rows.
    pub fn rows(&self) -> &[HistoricalRow] {
        &self.rows
    }

    /// Historical records without the rent target.
    pub fn records(&self) -> impl Iterator<Item = &RentalRecord> {
        self.rows.iter().map(|r| &r.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unique values of a string field, in order of first appearance
    /// (matching how the selection lists were built in the source data).
    fn unique_by<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&RentalRecord) -> &str,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in self.records() {
            let value = field(record);
            if seen.insert(value.to_string()) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Unique values of a string field among records of one city.
    fn unique_for_city<F>(&self, city: &str, field: F) -> Vec<String>
    where
        F: Fn(&RentalRecord) -> &str,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in self.records().filter(|r| r.city == city) {
            let value = field(record);
            if seen.insert(value.to_string()) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Cities observed in the dataset.
    pub fn cities(&self) -> Vec<String> {
        self.unique_by(|r| &r.city)
    }

    /// Area types observed for one city.
    pub fn area_types_for(&self, city: &str) -> Vec<String> {
        self.unique_for_city(city, |r| &r.area_type)
    }

    /// Area localities observed for one city.
    pub fn localities_for(&self, city: &str) -> Vec<String> {
        self.unique_for_city(city, |r| &r.area_locality)
    }

    /// Furnishing statuses observed in the dataset (city-independent).
    pub fn furnishing_statuses(&self) -> Vec<String> {
        self.unique_by(|r| &r.furnishing_status)
    }

    /// Tenant preferences observed in the dataset (city-independent).
    pub fn tenant_preferences(&self) -> Vec<String> {
        self.unique_by(|r| &r.tenant_preferred)
    }

    /// Points of contact observed in the dataset (city-independent).
    pub fn contact_points(&self) -> Vec<String> {
        self.unique_by(|r| &r.point_of_contact)
    }

    /// Observed (min, max) of the bedroom/hall/kitchen count, used to bound
    /// the corresponding form input.
    pub fn bhk_range(&self) -> (u32, u32) {
        let mut min = u32::MAX;
        let mut max = 0;
        for record in self.records() {
            min = min.min(record.bhk);
            max = max.max(record.bhk);
        }
        (min, max)
    }

    /// Observed (min, max) of the size column.
    pub fn size_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in self.records() {
            min = min.min(record.size);
            max = max.max(record.size);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Posted On,BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact
2022-05-18,2,12000,900,2 out of 4,Super Area,Bandel,Kolkata,Semi-Furnished,Bachelors/Family,2,Contact Owner
2022-05-13,1,8500,500,Ground out of 2,Carpet Area,Salt Lake,Kolkata,Unfurnished,Bachelors,1,Contact Owner
2022-06-01,3,45000,1400,Lower Basement,Super Area,Powai,Mumbai,Furnished,Family,3,Contact Agent
2022-06-07,2,30000,900,4 out of 10,Super Area,Andheri,Mumbai,Semi-Furnished,Bachelors/Family,2,Contact Owner
";

    fn sample_dataset() -> RentalDataset {
        RentalDataset::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_load_derives_floor_levels() {
        let ds = sample_dataset();
        let floors: Vec<i32> = ds.records().map(|r| r.floor).collect();
        assert_eq!(floors, vec![2, 0, -1, 4]);
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        // `Posted On` is present in the file but not in the data model.
        let ds = sample_dataset();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.rows()[0].rent, 12000.0);
    }

    #[test]
    fn test_unrecognized_floor_is_fatal() {
        let csv = "\
BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact
2,12000,900,Top Floor,Super Area,Bandel,Kolkata,Semi-Furnished,Bachelors/Family,2,Contact Owner
";
        let err = RentalDataset::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::UnrecognizedFloor { row, descriptor } => {
                assert_eq!(row, 1);
                assert_eq!(descriptor, "Top Floor");
            }
            other => panic!("expected UnrecognizedFloor, got {other:?}"),
        }
    }

    #[test]
    fn test_nonpositive_size_is_fatal() {
        let csv = "\
BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact
2,12000,0,1 out of 2,Super Area,Bandel,Kolkata,Semi-Furnished,Bachelors/Family,2,Contact Owner
";
        let err = RentalDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidField { column: "Size", .. }
        ));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "\
BHK,Rent,Size,Floor
2,12000,900,1 out of 2
";
        assert!(matches!(
            RentalDataset::from_reader(csv.as_bytes()),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn test_empty_dataset_is_fatal() {
        let csv = "\
BHK,Rent,Size,Floor,Area Type,Area Locality,City,Furnishing Status,Tenant Preferred,Bathroom,Point of Contact
";
        assert!(matches!(
            RentalDataset::from_reader(csv.as_bytes()),
            Err(DataError::Empty)
        ));
    }

    #[test]
    fn test_city_filtered_options() {
        let ds = sample_dataset();
        assert_eq!(ds.cities(), vec!["Kolkata", "Mumbai"]);
        assert_eq!(ds.localities_for("Kolkata"), vec!["Bandel", "Salt Lake"]);
        assert_eq!(ds.localities_for("Mumbai"), vec!["Powai", "Andheri"]);
        assert_eq!(
            ds.area_types_for("Kolkata"),
            vec!["Super Area", "Carpet Area"]
        );
    }

    #[test]
    fn test_city_independent_options() {
        let ds = sample_dataset();
        assert_eq!(
            ds.furnishing_statuses(),
            vec!["Semi-Furnished", "Unfurnished", "Furnished"]
        );
        assert_eq!(
            ds.tenant_preferences(),
            vec!["Bachelors/Family", "Bachelors", "Family"]
        );
        assert_eq!(ds.contact_points(), vec!["Contact Owner", "Contact Agent"]);
    }

    #[test]
    fn test_numeric_bounds() {
        let ds = sample_dataset();
        assert_eq!(ds.bhk_range(), (1, 3));
        assert_eq!(ds.size_range(), (500.0, 1400.0));
    }
}
