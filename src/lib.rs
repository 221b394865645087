//! Tourism Explorer - a read-only dashboard over Indian tourism datasets
//!
//! Loads footfall statistics, places, verified services, scam reports and
//! local tips once, then serves an interactive map, charts and tables over
//! HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod html;
pub mod logging;
pub mod models;
pub mod views;
pub mod web;

// Re-export core types for public API
pub use config::ExplorerConfig;
pub use data::{DataFiles, DataStore, DatasetLoader, Datasets};
pub use error::{DashboardError, EmptySelection};
pub use views::{RenderedView, Selection, View};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
