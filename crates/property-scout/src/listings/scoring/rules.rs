use super::super::aggregates::PopulationAggregates;
use super::super::domain::{round_tenth, Property};
use super::super::suburb::SuburbMetrics;
use super::curves::{PRICE_PER_BEDROOM, PRICE_PER_SQM, PRICE_VS_MEDIAN};
use super::views::{
    FactorGroup, FeatureComponents, ScoreBreakdown, SuburbComponents, ValueComponents,
};

pub(crate) const SUBURB_FACTORS_MAX: u8 = 40;
pub(crate) const VALUE_FACTORS_MAX: u8 = 35;
pub(crate) const FEATURE_FACTORS_MAX: u8 = 25;

const MAX_PARKING_POINTS: f64 = 5.0;
const RENOVATION_POINTS: f64 = 4.0;
const AMENITY_RADIUS_KM: f64 = 5.0;

/// Ratios shared by the value factors, badges and comparison metrics.
pub(crate) struct ScoreSignals {
    pub price_per_bedroom: f64,
    pub price_per_sqm: f64,
    pub price_diff_pct: f64,
}

impl ScoreSignals {
    pub(crate) fn measure(property: &Property, aggregates: &PopulationAggregates) -> Self {
        let median = aggregates.median_price as f64;
        let price_diff_pct = if median > 0.0 {
            (property.price as f64 - median) / median * 100.0
        } else {
            0.0
        };

        Self {
            price_per_bedroom: property.price_per_bedroom(),
            price_per_sqm: property.price_per_sqm(),
            price_diff_pct,
        }
    }
}

/// Unrounded category scores.
pub(crate) struct FactorScores {
    pub suburb: SuburbComponents,
    pub value: ValueComponents,
    pub feature: FeatureComponents,
}

impl FactorScores {
    pub(crate) fn total(&self) -> f64 {
        self.suburb.sum() + self.value.sum() + self.feature.sum()
    }

    /// Rounds every displayed figure to one decimal place.
    pub(crate) fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            suburb_factors: FactorGroup {
                total: round_tenth(self.suburb.sum()),
                max: SUBURB_FACTORS_MAX,
                components: SuburbComponents {
                    suburb_quality: round_tenth(self.suburb.suburb_quality),
                    population_growth: round_tenth(self.suburb.population_growth),
                    walkability: round_tenth(self.suburb.walkability),
                },
            },
            value_factors: FactorGroup {
                total: round_tenth(self.value.sum()),
                max: VALUE_FACTORS_MAX,
                components: ValueComponents {
                    price_per_bedroom: round_tenth(self.value.price_per_bedroom),
                    vs_suburb_median: round_tenth(self.value.vs_suburb_median),
                    price_per_sqm: round_tenth(self.value.price_per_sqm),
                },
            },
            feature_factors: FactorGroup {
                total: round_tenth(self.feature.sum()),
                max: FEATURE_FACTORS_MAX,
                components: FeatureComponents {
                    property_type: round_tenth(self.feature.property_type),
                    parking: round_tenth(self.feature.parking),
                    renovation: round_tenth(self.feature.renovation),
                    amenities: round_tenth(self.feature.amenities),
                    market_velocity: round_tenth(self.feature.market_velocity),
                },
            },
        }
    }
}

pub(crate) fn score_factors(
    property: &Property,
    metrics: &SuburbMetrics,
    signals: &ScoreSignals,
) -> FactorScores {
    FactorScores {
        suburb: suburb_factors(metrics),
        value: value_factors(signals),
        feature: feature_factors(property),
    }
}

pub(crate) fn suburb_factors(metrics: &SuburbMetrics) -> SuburbComponents {
    SuburbComponents {
        suburb_quality: f64::from(metrics.suburb_score) / 100.0 * 20.0,
        population_growth: (metrics.population_growth / 5.0 * 10.0).min(10.0),
        walkability: f64::from(metrics.walkability) / 100.0 * 10.0,
    }
}

pub(crate) fn value_factors(signals: &ScoreSignals) -> ValueComponents {
    ValueComponents {
        price_per_bedroom: PRICE_PER_BEDROOM.eval(signals.price_per_bedroom),
        vs_suburb_median: PRICE_VS_MEDIAN.eval(signals.price_diff_pct),
        price_per_sqm: PRICE_PER_SQM.eval(signals.price_per_sqm),
    }
}

pub(crate) fn feature_factors(property: &Property) -> FeatureComponents {
    let train = (AMENITY_RADIUS_KM - property.distance_to_train).max(0.0);
    let shops = (AMENITY_RADIUS_KM - property.distance_to_shops).max(0.0);

    FeatureComponents {
        property_type: property.property_type.desirability(),
        parking: (f64::from(property.parking_spaces) * 2.0).min(MAX_PARKING_POINTS),
        renovation: if property.recently_renovated {
            RENOVATION_POINTS
        } else {
            0.0
        },
        amenities: (train + shops) / 2.0,
        market_velocity: market_velocity(property.days_on_market),
    }
}

fn market_velocity(days_on_market: u32) -> f64 {
    match days_on_market {
        0..=13 => 3.0,
        14..=44 => 2.0,
        45..=89 => 1.0,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::PropertyType;

    fn property() -> Property {
        Property {
            address: "12 Ocean Drive, Bronte".to_string(),
            price: 900_000,
            bedrooms: 3,
            bathrooms: 2,
            property_type: PropertyType::Townhouse,
            parking_spaces: 2,
            land_size: 220,
            internal_area: 150,
            days_on_market: 20,
            recently_renovated: true,
            distance_to_train: 0.8,
            distance_to_shops: 6.2,
        }
    }

    #[test]
    fn suburb_factors_scale_metrics() {
        let metrics = SuburbMetrics {
            suburb_score: 80,
            walkability: 60,
            population_growth: 2.5,
        };
        let components = suburb_factors(&metrics);
        assert!((components.suburb_quality - 16.0).abs() < 1e-9);
        assert!((components.population_growth - 5.0).abs() < 1e-9);
        assert!((components.walkability - 6.0).abs() < 1e-9);
    }

    #[test]
    fn growth_points_cap_at_ten() {
        let metrics = SuburbMetrics {
            suburb_score: 95,
            walkability: 95,
            population_growth: 5.0,
        };
        let components = suburb_factors(&metrics);
        assert!((components.population_growth - 10.0).abs() < 1e-9);
        assert!(components.sum() <= f64::from(SUBURB_FACTORS_MAX));
    }

    #[test]
    fn feature_factors_combine_amenities_and_velocity() {
        let components = feature_factors(&property());
        assert_eq!(components.property_type, 7.0);
        assert_eq!(components.parking, 4.0);
        assert_eq!(components.renovation, 4.0);
        // Train contributes 4.2, shops are beyond the radius.
        assert!((components.amenities - 2.1).abs() < 1e-9);
        assert_eq!(components.market_velocity, 2.0);
    }

    #[test]
    fn parking_points_are_capped() {
        let mut listing = property();
        listing.parking_spaces = 3;
        assert_eq!(feature_factors(&listing).parking, 5.0);
    }

    #[test]
    fn velocity_buckets() {
        assert_eq!(market_velocity(1), 3.0);
        assert_eq!(market_velocity(13), 3.0);
        assert_eq!(market_velocity(14), 2.0);
        assert_eq!(market_velocity(44), 2.0);
        assert_eq!(market_velocity(45), 1.0);
        assert_eq!(market_velocity(89), 1.0);
        assert_eq!(market_velocity(90), 0.5);
    }

    #[test]
    fn signals_guard_a_zero_median() {
        let aggregates = PopulationAggregates::default();
        let signals = ScoreSignals::measure(&property(), &aggregates);
        assert_eq!(signals.price_diff_pct, 0.0);
        assert!((signals.price_per_bedroom - 300_000.0).abs() < 1e-9);
        assert!((signals.price_per_sqm - 6_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_internal_area_is_priced_at_the_ceiling() {
        let mut listing = property();
        listing.internal_area = 0;
        let aggregates = PopulationAggregates {
            median_price: 900_000,
            ..PopulationAggregates::default()
        };
        let signals = ScoreSignals::measure(&listing, &aggregates);
        assert_eq!(signals.price_per_sqm, 5_000.0);
        assert!((value_factors(&signals).price_per_sqm - 6.0).abs() < 1e-9);
    }
}
