//! Configuration management for the tourism explorer
//!
//! Handles loading configuration from files and environment variables
//! and validates every setting before the server starts.

use crate::DashboardError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExplorerConfig {
    /// Input dataset settings
    #[serde(default)]
    pub data: DataConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Map view settings
    #[serde(default)]
    pub map: MapConfig,
    /// Verified services view settings
    #[serde(default)]
    pub services: ServicesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the datasets live and whether edits on disk are picked up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the five input files
    #[serde(default = "default_data_directory")]
    pub directory: PathBuf,
    /// Reload the snapshot when an input file's mtime changes
    #[serde(default)]
    pub reload_on_change: bool,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Map view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Maximum popup width in pixels
    #[serde(default = "default_popup_max_width")]
    pub popup_max_width: u32,
    /// Radius of scam warning circles in pixels
    #[serde(default = "default_scam_marker_radius")]
    pub scam_marker_radius: u32,
}

/// Verified services view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Number of rating histogram buckets
    #[serde(default = "default_rating_bins")]
    pub rating_bins: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_data_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_request_timeout() -> u32 {
    30
}

fn default_center_latitude() -> f64 {
    20.5937
}

fn default_center_longitude() -> f64 {
    78.9629
}

fn default_zoom() -> u8 {
    5
}

fn default_popup_max_width() -> u32 {
    300
}

fn default_scam_marker_radius() -> u32 {
    8
}

fn default_rating_bins() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
            reload_on_change: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            popup_max_width: default_popup_max_width(),
            scam_marker_radius: default_scam_marker_radius(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            rating_bins: default_rating_bins(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from specified path.
    ///
    /// An explicit path must exist; without one the user config directory
    /// and then `./config.toml` are tried, and both may be absent.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            Some(config_file) => {
                if !config_file.is_file() {
                    return Err(DashboardError::config(format!(
                        "Config file {} does not exist",
                        config_file.display()
                    ))
                    .into());
                }
                builder = builder.add_source(
                    File::from(config_file)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                let config_file = Self::get_config_path()
                    .filter(|path| path.exists())
                    .unwrap_or_else(|| PathBuf::from("config.toml"));
                builder = builder.add_source(
                    File::from(config_file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // TOURISM__SERVER__PORT=9000 style overrides
        builder = builder.add_source(
            Environment::with_prefix("TOURISM")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: ExplorerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourism-explorer").join("config.toml"))
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(DashboardError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds == 0 || self.server.request_timeout_seconds > 300 {
            return Err(DashboardError::config(
                "Request timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.map.zoom > 20 {
            return Err(DashboardError::config("Map zoom cannot exceed 20").into());
        }

        if !(-90.0..=90.0).contains(&self.map.center_latitude)
            || !(-180.0..=180.0).contains(&self.map.center_longitude)
        {
            return Err(DashboardError::config(format!(
                "Map center {:.4}, {:.4} is not a valid coordinate",
                self.map.center_latitude, self.map.center_longitude
            ))
            .into());
        }

        if !(1..=100).contains(&self.services.rating_bins) {
            return Err(DashboardError::config(
                "Rating histogram bins must be between 1 and 100",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DashboardError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(DashboardError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.server.host.trim().is_empty() {
            return Err(DashboardError::config("Server host cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert_eq!(config.data.directory, PathBuf::from("data"));
        assert!(!config.data.reload_on_change);
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.map.center_latitude, 20.5937);
        assert_eq!(config.map.center_longitude, 78.9629);
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.services.rating_bins, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::bad_level(|c: &mut ExplorerConfig| c.logging.level = "loud".into(), "Invalid log level")]
    #[case::bad_format(|c: &mut ExplorerConfig| c.logging.format = "xml".into(), "Invalid log format")]
    #[case::zero_port(|c: &mut ExplorerConfig| c.server.port = 0, "port cannot be 0")]
    #[case::zoom(|c: &mut ExplorerConfig| c.map.zoom = 25, "zoom cannot exceed")]
    #[case::timeout(|c: &mut ExplorerConfig| c.server.request_timeout_seconds = 500, "Request timeout")]
    #[case::bins(|c: &mut ExplorerConfig| c.services.rating_bins = 0, "histogram bins")]
    #[case::center(|c: &mut ExplorerConfig| c.map.center_latitude = 120.0, "not a valid coordinate")]
    fn test_config_validation_rejects(
        #[case] mutate: fn(&mut ExplorerConfig),
        #[case] expected: &str,
    ) {
        let mut config = ExplorerConfig::default();
        mutate(&mut config);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(expected));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[data]\ndirectory = \"/srv/tourism\"\n\n[server]\nport = 9000\n\n[services]\nrating_bins = 5\n"
        )
        .unwrap();

        let config = ExplorerConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.data.directory, PathBuf::from("/srv/tourism"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.services.rating_bins, 5);
        // untouched sections keep their defaults
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[logging]\nlevel = \"verbose\"\n").unwrap();

        let result = ExplorerConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("typo.toml");

        let err = ExplorerConfig::load_from_path(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_bind_address() {
        let config = ExplorerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8501");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = ExplorerConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("tourism-explorer"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
