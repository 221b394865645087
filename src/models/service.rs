use serde::{Deserialize, Serialize};

/// A verified tourist service from `services.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub rating: f64,
    pub contact: String,
}
