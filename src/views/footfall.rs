//! Tourist footfall: per-year comparison and multi-year trend

use serde::Serialize;

use super::chart::{BarChart, BarSeries, LineChart, LineSeries};
use super::{Panel, Selector, choose};
use crate::data::Datasets;
use crate::error::EmptySelection;
use crate::models::{FootfallRecord, VisitorCategory};

const VISITORS_LABEL: &str = "Number of Visitors";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootfallView {
    pub selector: Selector,
    pub body: Panel<FootfallCharts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootfallCharts {
    pub year: i32,
    /// Domestic vs foreign visitors per state for the selected year
    pub by_state: BarChart,
    /// Every state and category across all years
    pub trend: LineChart,
}

/// `requested_year` is the raw query value; text that is not a year selects nothing
pub fn render(datasets: &Datasets, requested_year: Option<&str>) -> FootfallView {
    let years = datasets.years();
    let chosen = match requested_year.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(year) => choose("year", &years, Some(year)),
            Err(_) => Err(EmptySelection::new("year", raw)),
        },
        None => choose("year", &years, None),
    };

    let selector = Selector::new("year", "Select Year", &years, chosen.as_ref().ok());
    let body = match chosen {
        Ok(year) => Panel::Ready(FootfallCharts {
            year,
            by_state: year_comparison(&datasets.footfall_for_year(year), year),
            trend: trend(&datasets.footfall, &years),
        }),
        Err(empty) => Panel::Empty(empty),
    };

    FootfallView { selector, body }
}

fn year_comparison(records: &[&FootfallRecord], year: i32) -> BarChart {
    BarChart {
        title: format!("Tourist Footfall by State ({year})"),
        x_label: "State".to_string(),
        y_label: VISITORS_LABEL.to_string(),
        categories: records.iter().map(|record| record.state.clone()).collect(),
        series: VisitorCategory::ALL
            .into_iter()
            .map(|category| BarSeries {
                name: category.column().to_string(),
                values: records.iter().map(|record| record.visitors(category)).collect(),
            })
            .collect(),
    }
}

fn trend(records: &[FootfallRecord], years: &[i32]) -> LineChart {
    let title = match (years.first(), years.last()) {
        (Some(first), Some(last)) => format!("Tourist Footfall Trend ({first}-{last})"),
        _ => "Tourist Footfall Trend".to_string(),
    };

    let mut states: Vec<&str> = Vec::new();
    for record in records {
        if !states.contains(&record.state.as_str()) {
            states.push(&record.state);
        }
    }

    let mut series = Vec::new();
    for category in VisitorCategory::ALL {
        for state in &states {
            let mut points: Vec<&FootfallRecord> =
                records.iter().filter(|r| r.state == *state).collect();
            points.sort_by_key(|r| r.year);

            series.push(LineSeries {
                name: format!("{state} ({})", category.column()),
                x: points.iter().map(|r| r.year).collect(),
                y: points.iter().map(|r| r.visitors(category)).collect(),
            });
        }
    }

    LineChart {
        title,
        x_label: "Year".to_string(),
        y_label: VISITORS_LABEL.to_string(),
        series,
    }
}
