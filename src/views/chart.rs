//! Chart and table primitives shared by the view renderers
//!
//! These are plain data: the page hands them to the browser's plotting
//! library, the JSON API returns them as-is.

use serde::Serialize;

/// A categorical table rendered server-side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, top to bottom
    #[must_use]
    pub fn column(&self, name: &str) -> Vec<&str> {
        match self.columns.iter().position(|c| c == name) {
            Some(index) => self.rows.iter().map(|row| row[index].as_str()).collect(),
            None => Vec::new(),
        }
    }
}

/// Grouped bar chart: one bar per series within each category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<u64>,
}

/// Multi-series line chart over integer x values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<u64>,
}

/// Proportions of a whole
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

impl PieChart {
    /// Count occurrences of each label; largest first, ties in first-seen order
    pub fn from_labels<'a, I>(title: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut slices: Vec<PieSlice> = Vec::new();
        for label in labels {
            match slices.iter_mut().find(|slice| slice.label == label) {
                Some(slice) => slice.value += 1,
                None => slices.push(PieSlice {
                    label: label.to_string(),
                    value: 1,
                }),
            }
        }
        // stable sort keeps first-seen order among equal counts
        slices.sort_by(|a, b| b.value.cmp(&a.value));

        Self {
            title: title.to_string(),
            slices,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

/// Frequency distribution with equal-width buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub title: String,
    pub x_label: String,
    pub buckets: Vec<Bucket>,
}

/// Half-open `[start, end)` except for the last bucket, which is closed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Histogram {
    pub fn from_values(title: &str, x_label: &str, values: &[f64], bins: usize) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            buckets: bucketize(values, bins),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

/// Split `[min, max]` of `values` into `bins` equal-width buckets.
///
/// When every value is equal the range becomes `[v - 0.5, v + 0.5]`.
#[must_use]
pub fn bucketize(values: &[f64], bins: usize) -> Vec<Bucket> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (start, span) = if max > min {
        (min, max - min)
    } else {
        (min - 0.5, 1.0)
    };
    let width = span / bins as f64;

    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            start: start + width * i as f64,
            end: start + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - start) / width).floor() as usize).min(bins - 1);
        buckets[index].count += 1;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_orders_by_count_then_first_seen() {
        let pie = PieChart::from_labels("Severity", ["Low", "High", "Medium", "High", "Medium"]);
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["High", "Medium", "Low"]);
        assert_eq!(pie.slices[0].value, 2);
        assert_eq!(pie.total(), 5);
    }

    #[test]
    fn test_pie_without_labels() {
        let pie = PieChart::from_labels("Severity", std::iter::empty());
        assert!(pie.slices.is_empty());
    }

    #[test]
    fn test_bucketize_counts_every_value() {
        let values = [3.0, 3.5, 4.0, 4.5, 5.0];
        let buckets = bucketize(&values, 4);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].start, 3.0);
        assert_eq!(buckets[3].end, 5.0);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 5);
        // max lands in the last bucket
        assert_eq!(buckets[3].count, 2);
    }

    #[test]
    fn test_bucketize_single_value() {
        let buckets = bucketize(&[4.2, 4.2], 10);
        assert_eq!(buckets.len(), 10);
        let filled: Vec<&Bucket> = buckets.iter().filter(|b| b.count > 0).collect();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].count, 2);
        assert!(filled[0].start - 1e-9 <= 4.2 && 4.2 < filled[0].end + 1e-9);
    }

    #[test]
    fn test_bucketize_empty() {
        assert!(bucketize(&[], 10).is_empty());
        assert!(bucketize(&[1.0], 0).is_empty());
    }

    #[test]
    fn test_table_column() {
        let mut table = Table::new(&["name", "rating"]);
        table.push_row(vec!["A".into(), "4.5".into()]);
        table.push_row(vec!["B".into(), "3.0".into()]);
        assert_eq!(table.column("name"), vec!["A", "B"]);
        assert!(table.column("missing").is_empty());
    }
}
