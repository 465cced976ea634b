use super::sequence::suburb_key;
use serde::{Deserialize, Serialize};

/// Suburb-level quality indicators derived from the suburb name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuburbMetrics {
    pub suburb_score: u8,
    pub walkability: u8,
    pub population_growth: f64,
}

impl SuburbMetrics {
    pub fn for_suburb(suburb: &str) -> Self {
        let hash = suburb_key(suburb);

        let suburb_score = (hash.wrapping_mul(7) % 100).clamp(50, 95) as u8;
        let walkability = (hash.wrapping_mul(11) % 100).clamp(40, 95) as u8;
        let population_growth = ((hash.wrapping_mul(13) % 50) as f64 / 10.0).clamp(0.5, 5.0);

        Self {
            suburb_score,
            walkability,
            population_growth,
        }
    }
}
