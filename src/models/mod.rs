//! Data models for the tourism datasets
//!
//! One module per input file, plus shared geographic coordinates.

pub mod footfall;
pub mod location;
pub mod place;
pub mod scam;
pub mod service;
pub mod tips;

// Re-export all public types for convenient access
pub use footfall::{FootfallRecord, VisitorCategory};
pub use location::Coordinates;
pub use place::Place;
pub use scam::{ScamDocument, ScamReport};
pub use service::Service;
pub use tips::{StateTip, TipsDocument};
