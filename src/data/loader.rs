//! Dataset loading
//!
//! Reads the five fixed input files into typed collections and validates
//! them up front so that rendering never meets a malformed record.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::Datasets;
use crate::models::place::{MAX_POPULARITY, MIN_POPULARITY};
use crate::models::{Coordinates, FootfallRecord, Place, ScamDocument, Service, TipsDocument};
use crate::{DashboardError, Result};

pub const FOOTFALL_FILE: &str = "tourist_footfall.csv";
pub const PLACES_FILE: &str = "places.csv";
pub const SERVICES_FILE: &str = "services.csv";
pub const SCAMS_FILE: &str = "scams.json";
pub const TIPS_FILE: &str = "tips.json";

const FOOTFALL_COLUMNS: &[&str] = &["state", "year", "domestic_visitors", "foreign_visitors"];
const PLACES_COLUMNS: &[&str] = &[
    "name",
    "type",
    "description",
    "latitude",
    "longitude",
    "entry_fee",
    "popularity",
];
const SERVICES_COLUMNS: &[&str] = &["name", "type", "region", "rating", "contact"];

/// Locations of the input files inside one data directory
#[derive(Debug, Clone)]
pub struct DataFiles {
    directory: PathBuf,
}

impl DataFiles {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Every input file, in load order
    #[must_use]
    pub fn all(&self) -> Vec<PathBuf> {
        [FOOTFALL_FILE, PLACES_FILE, SERVICES_FILE, SCAMS_FILE, TIPS_FILE]
            .iter()
            .map(|name| self.path(name))
            .collect()
    }

    /// Modification times of all input files, `None` where unreadable
    #[must_use]
    pub fn modification_times(&self) -> Vec<Option<SystemTime>> {
        self.all()
            .iter()
            .map(|path| fs::metadata(path).and_then(|meta| meta.modified()).ok())
            .collect()
    }
}

/// Loader for the tourism datasets
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load and validate every dataset; any failure is fatal
    #[instrument(skip(files), fields(directory = %files.directory().display()))]
    pub fn load(files: &DataFiles) -> Result<Datasets> {
        info!("Loading tourism datasets");

        let footfall: Vec<FootfallRecord> =
            Self::read_csv(&files.path(FOOTFALL_FILE), FOOTFALL_COLUMNS)?;
        let places: Vec<Place> = Self::read_csv(&files.path(PLACES_FILE), PLACES_COLUMNS)?;
        validate_places(PLACES_FILE, &places)?;
        let services: Vec<Service> =
            Self::read_csv(&files.path(SERVICES_FILE), SERVICES_COLUMNS)?;
        validate_services(SERVICES_FILE, &services)?;

        let scams: ScamDocument = Self::read_json(&files.path(SCAMS_FILE))?;
        for (index, scam) in scams.scams.iter().enumerate() {
            check_coordinates(SCAMS_FILE, index, scam.coordinates())?;
        }
        let tips: TipsDocument = Self::read_json(&files.path(TIPS_FILE))?;

        let datasets = Datasets {
            footfall,
            places,
            services,
            scams: scams.scams,
            tips: tips.states,
            loaded_at: Utc::now(),
        };

        info!("Loaded datasets: {}", datasets.summary());
        Ok(datasets)
    }

    /// Read a CSV file whose header must contain `required_columns`
    pub fn read_csv<T: DeserializeOwned>(path: &Path, required_columns: &[&str]) -> Result<Vec<T>> {
        let file = open_resource(path)?;
        Self::parse_csv(&resource_name(path), file, required_columns)
    }

    /// Parse CSV content; extra columns are ignored, missing ones are an error
    pub fn parse_csv<T: DeserializeOwned, R: Read>(
        resource: &str,
        reader: R,
        required_columns: &[&str],
    ) -> Result<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DashboardError::data_unavailable(resource, format!("unreadable header: {e}")))?
            .clone();

        let missing: Vec<&str> = required_columns
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|header| header == *column))
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::data_unavailable(
                resource,
                format!("missing columns: {}", missing.join(", ")),
            ));
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize().enumerate() {
            let record: T = row.map_err(|e| {
                DashboardError::data_unavailable(resource, format!("record {}: {e}", index + 1))
            })?;
            records.push(record);
        }

        debug!("Parsed {} records from {}", records.len(), resource);
        Ok(records)
    }

    /// Read a JSON document into its typed shape
    pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let mut content = String::new();
        open_resource(path)?
            .read_to_string(&mut content)
            .map_err(|e| DashboardError::data_unavailable(resource_name(path), e.to_string()))?;
        Self::parse_json(&resource_name(path), &content)
    }

    pub fn parse_json<T: DeserializeOwned>(resource: &str, content: &str) -> Result<T> {
        serde_json::from_str(content)
            .map_err(|e| DashboardError::data_unavailable(resource, format!("malformed JSON: {e}")))
    }
}

fn resource_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn open_resource(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(DashboardError::data_unavailable(
            resource_name(path),
            format!("file not found at {}", path.display()),
        ));
    }
    File::open(path).map_err(|e| DashboardError::data_unavailable(resource_name(path), e.to_string()))
}

fn check_coordinates(resource: &str, index: usize, coordinates: Coordinates) -> Result<()> {
    if coordinates.is_valid() {
        Ok(())
    } else {
        Err(DashboardError::data_unavailable(
            resource,
            format!(
                "record {}: invalid coordinates {}",
                index + 1,
                coordinates.format_coordinates()
            ),
        ))
    }
}

fn validate_places(resource: &str, places: &[Place]) -> Result<()> {
    for (index, place) in places.iter().enumerate() {
        check_coordinates(resource, index, place.coordinates())?;

        if !(MIN_POPULARITY..=MAX_POPULARITY).contains(&place.popularity) {
            return Err(DashboardError::data_unavailable(
                resource,
                format!(
                    "record {}: popularity {} outside {}-{}",
                    index + 1,
                    place.popularity,
                    MIN_POPULARITY,
                    MAX_POPULARITY
                ),
            ));
        }

        if !place.entry_fee.is_finite() || place.entry_fee < 0.0 {
            return Err(DashboardError::data_unavailable(
                resource,
                format!("record {}: invalid entry fee {}", index + 1, place.entry_fee),
            ));
        }
    }
    Ok(())
}

fn validate_services(resource: &str, services: &[Service]) -> Result<()> {
    match services.iter().position(|service| !service.rating.is_finite()) {
        Some(index) => Err(DashboardError::data_unavailable(
            resource,
            format!("record {}: rating is not a number", index + 1),
        )),
        None => Ok(()),
    }
}
