use super::domain::Property;
use serde::{Deserialize, Serialize};

/// Population-wide baselines every opportunity score is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationAggregates {
    pub median_price: u64,
    pub avg_parking: f64,
    pub avg_internal_area: f64,
    pub avg_days_on_market: f64,
}

impl PopulationAggregates {
    /// Computes baselines over the full population, never a paginated slice.
    ///
    /// The median is the element at index `n / 2` of the ascending prices, which
    /// is the upper of the two middle values for even populations. An empty
    /// population yields all-zero baselines.
    pub fn from_population(population: &[Property]) -> Self {
        if population.is_empty() {
            return Self::default();
        }

        let mut prices: Vec<u64> = population.iter().map(|property| property.price).collect();
        prices.sort_unstable();
        let median_price = prices[prices.len() / 2];

        let count = population.len() as f64;
        let mean = |value: fn(&Property) -> f64| population.iter().map(value).sum::<f64>() / count;

        Self {
            median_price,
            avg_parking: mean(|property| f64::from(property.parking_spaces)),
            avg_internal_area: mean(|property| f64::from(property.internal_area)),
            avg_days_on_market: mean(|property| f64::from(property.days_on_market)),
        }
    }
}
