use super::super::domain::Property;
use super::signals::Badge;
use serde::Serialize;

/// A listing together with its opportunity score and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProperty {
    #[serde(flatten)]
    pub property: Property,
    pub opportunity_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub badges: Vec<Badge>,
    pub insights: Vec<String>,
    pub comparison_metrics: ComparisonMetrics,
    pub price_per_bedroom: i64,
    pub price_per_sqm: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub suburb_factors: FactorGroup<SuburbComponents>,
    pub value_factors: FactorGroup<ValueComponents>,
    pub feature_factors: FactorGroup<FeatureComponents>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.suburb_factors.total + self.value_factors.total + self.feature_factors.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorGroup<C> {
    pub total: f64,
    pub max: u8,
    pub components: C,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuburbComponents {
    pub suburb_quality: f64,
    pub population_growth: f64,
    pub walkability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueComponents {
    pub price_per_bedroom: f64,
    pub vs_suburb_median: f64,
    pub price_per_sqm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureComponents {
    pub property_type: f64,
    pub parking: f64,
    pub renovation: f64,
    pub amenities: f64,
    pub market_velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMetrics {
    pub price_vs_median_pct: f64,
    pub price_per_bedroom: i64,
    /// Median price over an assumed three-bedroom dwelling.
    pub suburb_avg_price_per_bedroom: i64,
    pub size_vs_avg_pct: f64,
    pub parking_vs_avg: f64,
    pub days_vs_avg: i64,
}

impl SuburbComponents {
    pub fn sum(&self) -> f64 {
        self.suburb_quality + self.population_growth + self.walkability
    }
}

impl ValueComponents {
    pub fn sum(&self) -> f64 {
        self.price_per_bedroom + self.vs_suburb_median + self.price_per_sqm
    }
}

impl FeatureComponents {
    pub fn sum(&self) -> f64 {
        self.property_type + self.parking + self.renovation + self.amenities + self.market_velocity
    }
}
