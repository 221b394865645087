//! Error types and handling for the tourism explorer

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A filter value that matched no records.
///
/// Renderers turn this into an empty-state view instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptySelection {
    /// Which filter was applied (`year`, `region`, `state`)
    pub filter: String,
    /// The value the user picked, if any
    pub value: Option<String>,
}

impl EmptySelection {
    pub fn new<F: Into<String>, V: ToString>(filter: F, value: V) -> Self {
        Self {
            filter: filter.into(),
            value: Some(value.to_string()),
        }
    }

    /// No options exist at all for this filter
    pub fn no_options<F: Into<String>>(filter: F) -> Self {
        Self {
            filter: filter.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match &self.value {
            Some(value) => format!("No {} data for {}", self.filter, value),
            None => format!("No {} data available", self.filter),
        }
    }
}

impl fmt::Display for EmptySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Main error type for the tourism explorer
#[derive(Error, Debug)]
pub enum DashboardError {
    /// An input file is missing or malformed
    #[error("Data unavailable: {resource}: {reason}")]
    DataUnavailable { resource: String, reason: String },

    /// A selected filter key matched nothing
    #[error("Empty selection: {0}")]
    EmptySelection(EmptySelection),

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DashboardError {
    /// Create a new data-unavailable error for a named resource
    pub fn data_unavailable<R: Into<String>, S: Into<String>>(resource: R, reason: S) -> Self {
        Self::DataUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::DataUnavailable { resource, reason } => {
                format!("Could not load {resource}: {reason}. Check the data directory.")
            }
            DashboardError::EmptySelection(selection) => selection.message(),
            DashboardError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            DashboardError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<EmptySelection> for DashboardError {
    fn from(selection: EmptySelection) -> Self {
        Self::EmptySelection(selection)
    }
}
