use std::fmt;

use strum::{Display, IntoStaticStr};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Location,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, IntoStaticStr)]
pub enum PriceLevel {
    Free,
    Budget,
    #[default]
    Moderate,
    Expensive,
    #[strum(serialize = "Very Expensive")]
    VeryExpensive,
}

impl From<Option<u8>> for PriceLevel {
    fn from(value: Option<u8>) -> Self {
        match value {
            Some(0) => Self::Free,
            Some(1) => Self::Budget,
            Some(3) => Self::Expensive,
            Some(4) => Self::VeryExpensive,
            Some(_) | None => Self::Moderate,
        }
    }
}

/// Cost label of a provider price tier. Unknown tiers read as `Moderate`.
pub fn price_level_label(level: Option<u8>) -> &'static str {
    PriceLevel::from(level).into()
}
