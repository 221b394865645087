use serde::{Deserialize, Serialize};

/// Visitor counts for one state in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootfallRecord {
    pub state: String,
    pub year: i32,
    pub domestic_visitors: u64,
    pub foreign_visitors: u64,
}

/// The two visitor categories plotted side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorCategory {
    DomesticVisitors,
    ForeignVisitors,
}

impl VisitorCategory {
    pub const ALL: [VisitorCategory; 2] = [
        VisitorCategory::DomesticVisitors,
        VisitorCategory::ForeignVisitors,
    ];

    /// Column name as it appears in the footfall table
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            VisitorCategory::DomesticVisitors => "domestic_visitors",
            VisitorCategory::ForeignVisitors => "foreign_visitors",
        }
    }
}

impl FootfallRecord {
    #[must_use]
    pub fn visitors(&self, category: VisitorCategory) -> u64 {
        match category {
            VisitorCategory::DomesticVisitors => self.domestic_visitors,
            VisitorCategory::ForeignVisitors => self.foreign_visitors,
        }
    }
}
