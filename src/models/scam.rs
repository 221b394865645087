use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Top-level shape of `scams.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ScamDocument {
    pub scams: Vec<ScamReport>,
}

/// A reported tourist scam pinned to a city location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScamReport {
    pub city: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Categorical, e.g. "High", "Medium", "Low"
    pub severity: String,
    pub prevention: String,
    /// `[latitude, longitude]`
    pub location: [f64; 2],
}

impl ScamReport {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::from(self.location)
    }
}
