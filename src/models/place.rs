//! Tourist destinations shown on the map

use serde::{Deserialize, Serialize};

use super::Coordinates;

pub const MIN_POPULARITY: u8 = 1;
pub const MAX_POPULARITY: u8 = 5;

/// A row of `places.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub entry_fee: f64,
    pub popularity: u8,
}

impl Place {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Entry fee in rupees, without a fractional part for whole amounts
    #[must_use]
    pub fn fee_label(&self) -> String {
        format!("₹{}", format_amount(self.entry_fee))
    }

    /// One star glyph per popularity point
    #[must_use]
    pub fn popularity_stars(&self) -> String {
        "⭐".repeat(usize::from(self.popularity))
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taj_mahal() -> Place {
        Place {
            name: "Taj Mahal".to_string(),
            kind: "Monument".to_string(),
            description: "Ivory-white marble mausoleum".to_string(),
            latitude: 27.1751,
            longitude: 78.0421,
            entry_fee: 50.0,
            popularity: 5,
        }
    }

    #[test]
    fn test_fee_label_whole_amount() {
        assert_eq!(taj_mahal().fee_label(), "₹50");
    }

    #[test]
    fn test_fee_label_fractional_amount() {
        let mut place = taj_mahal();
        place.entry_fee = 12.5;
        assert_eq!(place.fee_label(), "₹12.5");

        place.entry_fee = 0.0;
        assert_eq!(place.fee_label(), "₹0");
    }

    #[test]
    fn test_popularity_stars() {
        assert_eq!(taj_mahal().popularity_stars(), "⭐⭐⭐⭐⭐");

        let mut place = taj_mahal();
        place.popularity = 2;
        assert_eq!(place.popularity_stars().chars().count(), 2);
    }
}
