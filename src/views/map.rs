//! Interactive map of places and scam warnings

use serde::Serialize;

use crate::config::MapConfig;
use crate::data::Datasets;
use crate::html::escape;
use crate::models::{Coordinates, Place, ScamReport};

pub const SCAM_MARKER_COLOR: &str = "red";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    /// Place markers are grouped by the client's cluster plugin
    pub cluster_places: bool,
    pub popup_max_width: u32,
    pub places: Vec<PlaceMarker>,
    pub warnings: Vec<CircleMarker>,
}

/// Pin for one tourist destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceMarker {
    pub position: Coordinates,
    pub tooltip: String,
    /// Pre-escaped HTML fragment
    pub popup: String,
}

/// Filled circle flagging a scam location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub position: Coordinates,
    pub radius: u32,
    pub color: String,
    pub fill: bool,
    /// Pre-escaped HTML fragment
    pub popup: String,
}

pub fn render(datasets: &Datasets, settings: &MapConfig) -> MapView {
    MapView {
        center: Coordinates::new(settings.center_latitude, settings.center_longitude),
        zoom: settings.zoom,
        cluster_places: true,
        popup_max_width: settings.popup_max_width,
        places: datasets.places.iter().map(place_marker).collect(),
        warnings: datasets
            .scams
            .iter()
            .map(|scam| scam_marker(scam, settings.scam_marker_radius))
            .collect(),
    }
}

fn place_marker(place: &Place) -> PlaceMarker {
    let popup = format!(
        "<b>{}</b><br>Type: {}<br>Description: {}<br>Entry Fee: {}<br>Popularity: {}",
        escape(&place.name),
        escape(&place.kind),
        escape(&place.description),
        place.fee_label(),
        place.popularity_stars()
    );

    PlaceMarker {
        position: place.coordinates(),
        tooltip: escape(&place.name),
        popup,
    }
}

fn scam_marker(scam: &ScamReport, radius: u32) -> CircleMarker {
    let popup = format!(
        "⚠️ {}<br>{}<br>Prevention: {}",
        escape(&scam.kind),
        escape(&scam.description),
        escape(&scam.prevention)
    );

    CircleMarker {
        position: scam.coordinates(),
        radius,
        color: SCAM_MARKER_COLOR.to_string(),
        fill: true,
        popup,
    }
}
