use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Townhouse,
    Unit,
    Villa,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::House,
            Self::Apartment,
            Self::Townhouse,
            Self::Unit,
            Self::Villa,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Townhouse => "Townhouse",
            Self::Unit => "Unit",
            Self::Villa => "Villa",
        }
    }

    /// Attached dwellings carry no land title and use unit-style addresses.
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Apartment | Self::Unit)
    }

    /// Feature points awarded for the dwelling type.
    pub const fn desirability(self) -> f64 {
        match self {
            Self::House => 8.0,
            Self::Townhouse => 7.0,
            Self::Villa => 6.5,
            Self::Apartment => 6.0,
            Self::Unit => 5.5,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A synthesized listing. Never mutated once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub address: String,
    pub price: u64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub property_type: PropertyType,
    pub parking_spaces: u8,
    pub land_size: u32,
    pub internal_area: u32,
    pub days_on_market: u32,
    pub recently_renovated: bool,
    pub distance_to_train: f64,
    pub distance_to_shops: f64,
}

impl Property {
    pub fn price_per_bedroom(&self) -> f64 {
        self.price as f64 / f64::from(self.bedrooms.max(1))
    }

    /// Internal areas of zero are priced at the penalised ceiling.
    pub fn price_per_sqm(&self) -> f64 {
        if self.internal_area > 0 {
            self.price as f64 / f64::from(self.internal_area)
        } else {
            UNKNOWN_AREA_PRICE_PER_SQM
        }
    }
}

pub(crate) const UNKNOWN_AREA_PRICE_PER_SQM: f64 = 5_000.0;

/// Rounds half away from zero to one decimal place.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
