//! View selection and rendering
//!
//! The navigation bar offers a closed set of five views. Each view has one
//! renderer that turns the loaded datasets (plus the user's filter choice)
//! into a serialisable model; renderers never share state.

pub mod chart;
pub mod footfall;
pub mod map;
pub mod scams;
pub mod services;
pub mod tips;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::ExplorerConfig;
use crate::data::Datasets;
use crate::error::EmptySelection;

pub use footfall::{FootfallCharts, FootfallView};
pub use map::{CircleMarker, MapView, PlaceMarker};
pub use scams::ScamsView;
pub use services::{ServiceListing, ServicesView};
pub use tips::{StateGuide, TipSection, TipsView};

/// The five navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Map,
    Footfall,
    Scams,
    Services,
    Tips,
}

impl View {
    /// Navigation order
    pub const ALL: [View; 5] = [
        View::Map,
        View::Footfall,
        View::Scams,
        View::Services,
        View::Tips,
    ];

    /// URL path segment
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            View::Map => "map",
            View::Footfall => "footfall",
            View::Scams => "scams",
            View::Services => "services",
            View::Tips => "tips",
        }
    }

    /// Navigation label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Map => "Interactive Map",
            View::Footfall => "Tourist Footfall",
            View::Scams => "Scam Reports",
            View::Services => "Verified Services",
            View::Tips => "Local Tips",
        }
    }

    /// Page heading
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            View::Map => "Interactive Map of India",
            View::Footfall => "Tourist Footfall Analysis",
            View::Scams => "Tourist Scam Reports",
            View::Services => "Verified Tourist Services",
            View::Tips => "Local Tips and Cultural Information",
        }
    }

    /// Short line under the heading, where the view has one
    #[must_use]
    pub fn intro(self) -> Option<&'static str> {
        match self {
            View::Map => Some("Explore popular tourist destinations across India"),
            View::Scams => Some("Stay informed about common tourist scams in different cities"),
            View::Services => Some("Find trusted services across different regions"),
            View::Footfall | View::Tips => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A path segment that names no view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view '{}'", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.slug() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Per-view filter choices, as carried by the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Selection {
    pub year: Option<String>,
    pub region: Option<String>,
    pub state: Option<String>,
}

/// A single-select control and its current value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    /// Query parameter name
    pub name: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl Selector {
    pub fn new<T: ToString>(name: &str, label: &str, options: &[T], selected: Option<&T>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            selected: selected.map(ToString::to_string),
        }
    }
}

/// Content of a filtered view: either rendered or an explicit empty state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    Empty(EmptySelection),
}

impl<T> Panel<T> {
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(content) => Some(content),
            Panel::Empty(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Panel::Empty(_))
    }
}

/// Pick the requested key, falling back to the first option.
///
/// Mirrors a select box: no request means the first entry is shown.
pub(crate) fn choose<T: PartialEq + Clone + ToString>(
    filter: &str,
    options: &[T],
    requested: Option<T>,
) -> Result<T, EmptySelection> {
    match requested {
        Some(key) if options.contains(&key) => Ok(key),
        Some(key) => Err(EmptySelection::new(filter, key.to_string())),
        None => options
            .first()
            .cloned()
            .ok_or_else(|| EmptySelection::no_options(filter)),
    }
}

/// Output of exactly one renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "model", rename_all = "lowercase")]
pub enum RenderedView {
    Map(MapView),
    Footfall(FootfallView),
    Scams(ScamsView),
    Services(ServicesView),
    Tips(TipsView),
}

impl RenderedView {
    #[must_use]
    pub fn view(&self) -> View {
        match self {
            RenderedView::Map(_) => View::Map,
            RenderedView::Footfall(_) => View::Footfall,
            RenderedView::Scams(_) => View::Scams,
            RenderedView::Services(_) => View::Services,
            RenderedView::Tips(_) => View::Tips,
        }
    }
}

/// Dispatch to the renderer for `view`
#[instrument(skip(datasets, selection, config))]
pub fn render(
    view: View,
    datasets: &Datasets,
    selection: &Selection,
    config: &ExplorerConfig,
) -> RenderedView {
    debug!(?selection, "Rendering view");
    match view {
        View::Map => RenderedView::Map(map::render(datasets, &config.map)),
        View::Footfall => {
            RenderedView::Footfall(footfall::render(datasets, selection.year.as_deref()))
        }
        View::Scams => RenderedView::Scams(scams::render(datasets)),
        View::Services => RenderedView::Services(services::render(
            datasets,
            selection.region.as_deref(),
            config.services.rating_bins,
        )),
        View::Tips => RenderedView::Tips(tips::render(datasets, selection.state.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use rstest::rstest;

    #[rstest]
    #[case("map", View::Map)]
    #[case("footfall", View::Footfall)]
    #[case("scams", View::Scams)]
    #[case("services", View::Services)]
    #[case("tips", View::Tips)]
    fn test_view_slug_round_trip(#[case] slug: &str, #[case] view: View) {
        assert_eq!(slug.parse::<View>().unwrap(), view);
        assert_eq!(view.slug(), slug);
    }

    #[rstest]
    #[case("")]
    #[case("Map")]
    #[case("weather")]
    fn test_unknown_view(#[case] slug: &str) {
        assert_eq!(slug.parse::<View>(), Err(UnknownView(slug.to_string())));
    }

    #[test]
    fn test_navigation_labels() {
        let labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Interactive Map",
                "Tourist Footfall",
                "Scam Reports",
                "Verified Services",
                "Local Tips"
            ]
        );
    }

    #[test]
    fn test_render_dispatches_to_one_view() {
        let datasets = fixtures::sample_datasets();
        let config = ExplorerConfig::default();
        for view in View::ALL {
            let rendered = render(view, &datasets, &Selection::default(), &config);
            assert_eq!(rendered.view(), view);
        }
    }

    #[test]
    fn test_choose_defaults_to_first_option() {
        assert_eq!(choose("year", &[2018, 2019], None), Ok(2018));
        assert_eq!(choose("year", &[2018, 2019], Some(2019)), Ok(2019));
        assert_eq!(
            choose("year", &[2018, 2019], Some(1999)),
            Err(EmptySelection::new("year", 1999))
        );
        assert_eq!(
            choose::<i32>("year", &[], None),
            Err(EmptySelection::no_options("year"))
        );
    }

    #[test]
    fn test_rendered_view_json_is_tagged() {
        let datasets = fixtures::sample_datasets();
        let rendered = render(View::Scams, &datasets, &Selection::default(), &ExplorerConfig::default());
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["view"], "scams");
        assert!(json["model"]["table"]["rows"].is_array());
    }
}
