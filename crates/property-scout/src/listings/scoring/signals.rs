use super::super::aggregates::PopulationAggregates;
use super::super::domain::{round_tenth, Property, PropertyType};
use super::super::suburb::SuburbMetrics;
use super::rules::ScoreSignals;
use super::views::ComparisonMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_BADGES: usize = 4;

const GREAT_VALUE_DISCOUNT_PCT: f64 = -15.0;
const AFFORDABLE_MEDIAN_SHARE: f64 = 0.75;
const TRANSIT_HUB_KM: f64 = 0.5;
const INVESTOR_PRICE_PER_BEDROOM: f64 = 250_000.0;
const LARGER_THAN_AVERAGE: f64 = 1.1;
const ASSUMED_BEDROOMS: u64 = 3;

/// Listing badges, declared in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Great Value")]
    GreatValue,
    #[serde(rename = "Premium Features")]
    PremiumFeatures,
    #[serde(rename = "Transit Hub")]
    TransitHub,
    #[serde(rename = "High Growth Area")]
    HighGrowthArea,
    #[serde(rename = "Fresh Listing")]
    FreshListing,
    #[serde(rename = "Affordable")]
    Affordable,
    #[serde(rename = "Family Home")]
    FamilyHome,
    #[serde(rename = "Investor Special")]
    InvestorSpecial,
}

impl Badge {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::GreatValue,
            Self::PremiumFeatures,
            Self::TransitHub,
            Self::HighGrowthArea,
            Self::FreshListing,
            Self::Affordable,
            Self::FamilyHome,
            Self::InvestorSpecial,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GreatValue => "Great Value",
            Self::PremiumFeatures => "Premium Features",
            Self::TransitHub => "Transit Hub",
            Self::HighGrowthArea => "High Growth Area",
            Self::FreshListing => "Fresh Listing",
            Self::Affordable => "Affordable",
            Self::FamilyHome => "Family Home",
            Self::InvestorSpecial => "Investor Special",
        }
    }

    fn applies(
        self,
        property: &Property,
        metrics: &SuburbMetrics,
        aggregates: &PopulationAggregates,
        signals: &ScoreSignals,
    ) -> bool {
        match self {
            Self::GreatValue => signals.price_diff_pct < GREAT_VALUE_DISCOUNT_PCT,
            Self::PremiumFeatures => {
                property.recently_renovated
                    && property.parking_spaces >= 2
                    && property.land_size > 400
            }
            Self::TransitHub => property.distance_to_train < TRANSIT_HUB_KM,
            Self::HighGrowthArea => metrics.suburb_score > 80 && metrics.population_growth > 3.0,
            Self::FreshListing => property.days_on_market < 14,
            Self::Affordable => {
                (property.price as f64) < aggregates.median_price as f64 * AFFORDABLE_MEDIAN_SHARE
            }
            Self::FamilyHome => {
                property.bedrooms >= 4 && property.property_type == PropertyType::House
            }
            Self::InvestorSpecial => {
                signals.price_per_bedroom < INVESTOR_PRICE_PER_BEDROOM
                    && property.property_type.is_attached()
            }
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First [`MAX_BADGES`] matching badges in priority order.
pub(crate) fn award_badges(
    property: &Property,
    metrics: &SuburbMetrics,
    aggregates: &PopulationAggregates,
    signals: &ScoreSignals,
) -> Vec<Badge> {
    Badge::ordered()
        .into_iter()
        .filter(|badge| badge.applies(property, metrics, aggregates, signals))
        .take(MAX_BADGES)
        .collect()
}

pub(crate) fn generate_insights(
    property: &Property,
    aggregates: &PopulationAggregates,
    signals: &ScoreSignals,
) -> Vec<String> {
    let mut insights = Vec::new();

    if signals.price_diff_pct < 0.0 {
        insights.push(format!(
            "{:.0}% below suburb median",
            signals.price_diff_pct.abs()
        ));
    } else if signals.price_diff_pct > 0.0 {
        insights.push(format!("{:.0}% above suburb median", signals.price_diff_pct));
    }

    if f64::from(property.internal_area) > aggregates.avg_internal_area * LARGER_THAN_AVERAGE {
        insights.push(format!(
            "Larger than average ({}sqm)",
            property.internal_area
        ));
    }

    if f64::from(property.parking_spaces) > aggregates.avg_parking {
        insights.push(format!("{} parking spaces", property.parking_spaces));
    }

    if property.recently_renovated {
        insights.push("Recently renovated".to_string());
    }

    insights
}

pub(crate) fn compare(
    property: &Property,
    aggregates: &PopulationAggregates,
    signals: &ScoreSignals,
) -> ComparisonMetrics {
    let size_vs_avg_pct = if aggregates.avg_internal_area > 0.0 {
        (f64::from(property.internal_area) - aggregates.avg_internal_area)
            / aggregates.avg_internal_area
            * 100.0
    } else {
        0.0
    };

    ComparisonMetrics {
        price_vs_median_pct: round_tenth(signals.price_diff_pct),
        price_per_bedroom: signals.price_per_bedroom as i64,
        suburb_avg_price_per_bedroom: (aggregates.median_price / ASSUMED_BEDROOMS) as i64,
        size_vs_avg_pct: round_tenth(size_vs_avg_pct),
        parking_vs_avg: round_tenth(f64::from(property.parking_spaces) - aggregates.avg_parking),
        days_vs_avg: (f64::from(property.days_on_market) - aggregates.avg_days_on_market) as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates() -> PopulationAggregates {
        PopulationAggregates {
            median_price: 1_200_000,
            avg_parking: 1.4,
            avg_internal_area: 140.0,
            avg_days_on_market: 42.5,
        }
    }

    fn metrics() -> SuburbMetrics {
        SuburbMetrics {
            suburb_score: 88,
            walkability: 70,
            population_growth: 3.4,
        }
    }

    fn bargain_house() -> Property {
        Property {
            address: "8 King Street, Mosman".to_string(),
            price: 800_000,
            bedrooms: 4,
            bathrooms: 2,
            property_type: PropertyType::House,
            parking_spaces: 2,
            land_size: 650,
            internal_area: 210,
            days_on_market: 6,
            recently_renovated: true,
            distance_to_train: 0.3,
            distance_to_shops: 1.1,
        }
    }

    #[test]
    fn badges_keep_the_first_four_in_priority_order() {
        let property = bargain_house();
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        let badges = award_badges(&property, &metrics(), &aggregates, &signals);

        assert_eq!(
            badges,
            vec![
                Badge::GreatValue,
                Badge::PremiumFeatures,
                Badge::TransitHub,
                Badge::HighGrowthArea,
            ]
        );
    }

    #[test]
    fn later_badges_surface_when_earlier_ones_miss() {
        let mut property = bargain_house();
        property.recently_renovated = false;
        property.distance_to_train = 2.0;
        let metrics = SuburbMetrics {
            suburb_score: 60,
            ..metrics()
        };
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        let badges = award_badges(&property, &metrics, &aggregates, &signals);

        assert_eq!(
            badges,
            vec![
                Badge::GreatValue,
                Badge::FreshListing,
                Badge::Affordable,
                Badge::FamilyHome,
            ]
        );
    }

    #[test]
    fn investor_special_needs_an_attached_dwelling() {
        let property = Property {
            address: "Unit 4/19 Bay Lane, Mosman".to_string(),
            price: 420_000,
            bedrooms: 2,
            bathrooms: 1,
            property_type: PropertyType::Apartment,
            parking_spaces: 0,
            land_size: 0,
            internal_area: 70,
            days_on_market: 60,
            recently_renovated: false,
            distance_to_train: 3.0,
            distance_to_shops: 1.0,
        };
        let metrics = SuburbMetrics {
            suburb_score: 60,
            ..metrics()
        };
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        let badges = award_badges(&property, &metrics, &aggregates, &signals);
        assert_eq!(
            badges,
            vec![
                Badge::GreatValue,
                Badge::Affordable,
                Badge::InvestorSpecial,
            ]
        );
    }

    #[test]
    fn insights_follow_fixed_order() {
        let property = bargain_house();
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        let insights = generate_insights(&property, &aggregates, &signals);

        assert_eq!(
            insights,
            vec![
                "33% below suburb median".to_string(),
                "Larger than average (210sqm)".to_string(),
                "2 parking spaces".to_string(),
                "Recently renovated".to_string(),
            ]
        );
    }

    #[test]
    fn listing_at_the_median_has_no_price_insight() {
        let mut property = bargain_house();
        property.price = 1_200_000;
        property.internal_area = 140;
        property.parking_spaces = 1;
        property.recently_renovated = false;
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        assert!(generate_insights(&property, &aggregates, &signals).is_empty());
    }

    #[test]
    fn comparison_metrics_use_the_three_bedroom_reference() {
        let property = bargain_house();
        let aggregates = aggregates();
        let signals = ScoreSignals::measure(&property, &aggregates);

        let metrics = compare(&property, &aggregates, &signals);

        assert_eq!(metrics.price_vs_median_pct, -33.3);
        assert_eq!(metrics.price_per_bedroom, 200_000);
        assert_eq!(metrics.suburb_avg_price_per_bedroom, 400_000);
        assert_eq!(metrics.size_vs_avg_pct, 50.0);
        assert_eq!(metrics.parking_vs_avg, 0.6);
        assert_eq!(metrics.days_vs_avg, -36);
    }

    #[test]
    fn badges_serialize_as_labels() {
        let json = serde_json::to_string(&Badge::HighGrowthArea).expect("badge serializes");
        assert_eq!(json, "\"High Growth Area\"");
        for badge in Badge::ordered() {
            assert_eq!(badge.to_string(), badge.label());
        }
    }
}
