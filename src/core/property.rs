//! # Property
//!
//! The listing value object. Properties are immutable once built and are
//! identified by [`PropertyId`] alone: two values with the same id are the
//! same listing even if some other field differs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive integer identifying a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Returns `None` for zero; ids are strictly positive.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// For compile-time seed data whose ids are known to be positive.
    pub(crate) const fn from_seed(raw: u32) -> Self {
        debug_assert!(raw > 0);
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePropertyIdError {
    Empty,
    NotANumber(String),
    Zero,
}

impl fmt::Display for ParsePropertyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePropertyIdError::Empty => write!(f, "property id is empty"),
            ParsePropertyIdError::NotANumber(raw) => {
                write!(f, "property id is not a positive integer: {raw:?}")
            }
            ParsePropertyIdError::Zero => write!(f, "property id must be positive"),
        }
    }
}

impl std::error::Error for ParsePropertyIdError {}

impl FromStr for PropertyId {
    type Err = ParsePropertyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePropertyIdError::Empty);
        }
        // u32::from_str accepts a leading '+', route segments never carry one
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePropertyIdError::NotANumber(s.to_string()));
        }
        let raw: u32 = s
            .parse()
            .map_err(|_| ParsePropertyIdError::NotANumber(s.to_string()))?;
        PropertyId::new(raw).ok_or(ParsePropertyIdError::Zero)
    }
}

/// A real-estate listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    /// Asking price in whole currency units.
    pub price: u32,
    pub beds: u32,
    pub baths: u32,
    /// Living area in square feet.
    pub area: u32,
    /// Logical asset name, resolved by an `AssetResolver`.
    pub image_name: String,
    pub is_garage: bool,
}

impl Property {
    /// Whether `other` refers to the same listing. This is the equality used
    /// for favorites membership, not the derived structural `PartialEq`.
    pub fn same_listing(&self, other: &Property) -> bool {
        self.id == other.id
    }

    /// Price formatted the way listings display it, e.g. `$250000`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn area_label(&self) -> String {
        format!("{} sqft", self.area)
    }

    /// Long-form description shown on the detail screen.
    pub fn description(&self) -> String {
        format!(
            "This beautiful {} offers {} spacious bedrooms and {} modern bathrooms. \
             With {} square feet of living space, this property provides ample room \
             for comfortable living. Located in {}, it's perfect for those seeking a \
             luxurious lifestyle.",
            self.title.to_lowercase(),
            self.beds,
            self.baths,
            self.area,
            self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_property;

    #[test]
    fn test_property_id_parses_digits() {
        let id: PropertyId = "3".parse().unwrap();
        assert_eq!(id.get(), 3);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn test_property_id_rejects_garbage() {
        assert_eq!("".parse::<PropertyId>(), Err(ParsePropertyIdError::Empty));
        assert_eq!("0".parse::<PropertyId>(), Err(ParsePropertyIdError::Zero));
        assert!(matches!(
            "abc".parse::<PropertyId>(),
            Err(ParsePropertyIdError::NotANumber(_))
        ));
        assert!(matches!(
            "-1".parse::<PropertyId>(),
            Err(ParsePropertyIdError::NotANumber(_))
        ));
        assert!(matches!(
            "+2".parse::<PropertyId>(),
            Err(ParsePropertyIdError::NotANumber(_))
        ));
        // Overflows u32
        assert!(matches!(
            "99999999999".parse::<PropertyId>(),
            Err(ParsePropertyIdError::NotANumber(_))
        ));
    }

    #[test]
    fn test_same_listing_ignores_other_fields() {
        let a = sample_property(1);
        let mut b = sample_property(1);
        b.title = "Renamed".to_string();
        b.price = 1;

        assert_ne!(a, b);
        assert!(a.same_listing(&b));
        assert!(!a.same_listing(&sample_property(2)));
    }

    #[test]
    fn test_labels() {
        let p = sample_property(1);
        assert_eq!(p.price_label(), format!("${}", p.price));
        assert_eq!(p.area_label(), format!("{} sqft", p.area));
    }

    #[test]
    fn test_description_mentions_details() {
        let p = sample_property(1);
        let text = p.description();
        assert!(text.starts_with(&format!("This beautiful {}", p.title.to_lowercase())));
        assert!(text.contains(&p.address));
        assert!(text.contains(&format!("{} spacious bedrooms", p.beds)));
    }
}
