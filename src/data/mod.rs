//! Data module
//!
//! Loads the tourism datasets once and exposes them as an immutable,
//! shareable snapshot:
//! - Loader: typed CSV/JSON readers with load-time validation
//! - Store: the "load once, serve many renders" boundary
//! - Datasets: the snapshot plus the option lists that drive view selectors

pub mod loader;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::EmptySelection;
use crate::models::{FootfallRecord, Place, ScamReport, Service, StateTip};

pub use loader::{
    DataFiles, DatasetLoader, FOOTFALL_FILE, PLACES_FILE, SCAMS_FILE, SERVICES_FILE, TIPS_FILE,
};
pub use store::DataStore;

/// Every loaded collection; never mutated after load
#[derive(Debug, Clone)]
pub struct Datasets {
    pub footfall: Vec<FootfallRecord>,
    pub places: Vec<Place>,
    pub services: Vec<Service>,
    pub scams: Vec<ScamReport>,
    pub tips: Vec<StateTip>,
    pub loaded_at: DateTime<Utc>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub footfall: usize,
    pub places: usize,
    pub services: usize,
    pub scams: usize,
    pub states: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} footfall records, {} places, {} services, {} scam reports, {} states",
            self.footfall, self.places, self.services, self.scams, self.states
        )
    }
}

/// Option lists for the per-view select controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOptions {
    pub years: Vec<i32>,
    pub regions: Vec<String>,
    pub states: Vec<String>,
}

impl Datasets {
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            footfall: self.footfall.len(),
            places: self.places.len(),
            services: self.services.len(),
            scams: self.scams.len(),
            states: self.tips.len(),
        }
    }

    /// Distinct footfall years, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.footfall
            .iter()
            .map(|record| record.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct service regions, sorted
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|service| service.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// State names in document order
    #[must_use]
    pub fn state_names(&self) -> Vec<String> {
        self.tips.iter().map(|state| state.name.clone()).collect()
    }

    #[must_use]
    pub fn select_options(&self) -> SelectOptions {
        SelectOptions {
            years: self.years(),
            regions: self.regions(),
            states: self.state_names(),
        }
    }

    /// Footfall rows for one year, in input order
    #[must_use]
    pub fn footfall_for_year(&self, year: i32) -> Vec<&FootfallRecord> {
        self.footfall
            .iter()
            .filter(|record| record.year == year)
            .collect()
    }

    /// Services whose region equals `region` exactly, in input order
    #[must_use]
    pub fn services_in_region(&self, region: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|service| service.region == region)
            .collect()
    }

    /// Tips for the first state with this name
    pub fn tip_for(&self, state: &str) -> std::result::Result<&StateTip, EmptySelection> {
        self.tips
            .iter()
            .find(|tip| tip.name == state)
            .ok_or_else(|| EmptySelection::new("state", state))
    }
}
