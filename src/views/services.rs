//! Verified services filtered by region

use serde::Serialize;

use super::chart::{Histogram, Table};
use super::{Panel, Selector, choose};
use crate::data::Datasets;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesView {
    pub selector: Selector,
    pub body: Panel<ServiceListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceListing {
    pub region: String,
    pub table: Table,
    pub ratings: Histogram,
}

pub fn render(datasets: &Datasets, requested_region: Option<&str>, rating_bins: usize) -> ServicesView {
    let regions = datasets.regions();
    let chosen = choose("region", &regions, requested_region.map(str::to_string));

    let selector = Selector::new("region", "Select Region", &regions, chosen.as_ref().ok());
    let body = match chosen {
        Ok(region) => {
            let services = datasets.services_in_region(&region);

            let mut table = Table::new(&["name", "type", "rating", "contact"]);
            for service in &services {
                table.push_row(vec![
                    service.name.clone(),
                    service.kind.clone(),
                    format!("{:.1}", service.rating),
                    service.contact.clone(),
                ]);
            }

            let ratings: Vec<f64> = services.iter().map(|service| service.rating).collect();
            Panel::Ready(ServiceListing {
                region,
                table,
                ratings: Histogram::from_values(
                    "Service Rating Distribution",
                    "rating",
                    &ratings,
                    rating_bins,
                ),
            })
        }
        Err(empty) => Panel::Empty(empty),
    };

    ServicesView { selector, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::error::EmptySelection;

    #[test]
    fn test_table_holds_exactly_the_region() {
        let datasets = fixtures::sample_datasets();
        for region in datasets.regions() {
            let view = render(&datasets, Some(region.as_str()), 10);
            let listing = view.body.ready().unwrap();

            let expected: Vec<&str> = datasets
                .services
                .iter()
                .filter(|s| s.region == region)
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(listing.table.column("name"), expected, "region {region}");
            assert_eq!(listing.ratings.total(), expected.len());
        }
    }

    #[test]
    fn test_listing_columns_and_rating_format() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets, Some("North"), 10);
        let listing = view.body.ready().unwrap();

        assert_eq!(listing.table.columns, vec!["name", "type", "rating", "contact"]);
        assert_eq!(
            listing.table.rows[0],
            vec!["Delhi Heritage Walks", "Guide", "4.5", "+91-11-0000-0001"]
        );
        assert_eq!(listing.ratings.title, "Service Rating Distribution");
        assert_eq!(listing.ratings.buckets.len(), 10);
    }

    #[test]
    fn test_default_region_is_first_sorted() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets, None, 10);
        assert_eq!(view.selector.selected.as_deref(), Some("North"));
        assert_eq!(view.selector.options, vec!["North", "South", "West"]);
    }

    #[test]
    fn test_absent_region_renders_empty_state() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets, Some("Atlantis"), 10);
        assert_eq!(view.body, Panel::Empty(EmptySelection::new("region", "Atlantis")));
    }

    #[test]
    fn test_bucket_count_follows_setting() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets, Some("North"), 4);
        assert_eq!(view.body.ready().unwrap().ratings.buckets.len(), 4);
    }
}
