//! Scam report table and severity breakdown

use serde::Serialize;

use super::chart::{PieChart, Table};
use crate::data::Datasets;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScamsView {
    pub table: Table,
    pub severity: PieChart,
}

pub fn render(datasets: &Datasets) -> ScamsView {
    let mut table = Table::new(&["city", "type", "description", "severity", "prevention"]);
    for scam in &datasets.scams {
        table.push_row(vec![
            scam.city.clone(),
            scam.kind.clone(),
            scam.description.clone(),
            scam.severity.clone(),
            scam.prevention.clone(),
        ]);
    }

    let severity = PieChart::from_labels(
        "Scam Severity Distribution",
        datasets.scams.iter().map(|scam| scam.severity.as_str()),
    );

    ScamsView { table, severity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_table_lists_every_report_in_order() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets);
        assert_eq!(
            view.table.columns,
            vec!["city", "type", "description", "severity", "prevention"]
        );
        assert_eq!(view.table.column("city"), vec!["Agra", "Jaipur", "Goa"]);
        assert_eq!(view.table.rows[1][1], "Gem Scam");
    }

    #[test]
    fn test_severity_distribution() {
        let datasets = fixtures::sample_datasets();
        let view = render(&datasets);
        assert_eq!(view.severity.title, "Scam Severity Distribution");
        assert_eq!(view.severity.slices.len(), 2);
        assert_eq!(view.severity.slices[0].label, "High");
        assert_eq!(view.severity.slices[0].value, 2);
        assert_eq!(view.severity.total(), datasets.scams.len());
    }

    #[test]
    fn test_duplicate_reports_are_kept() {
        let mut datasets = fixtures::sample_datasets();
        let first = datasets.scams[0].clone();
        datasets.scams.push(first);

        let view = render(&datasets);
        assert_eq!(view.table.rows.len(), 4);
        assert_eq!(view.severity.slices[0].value, 3);
    }
}
