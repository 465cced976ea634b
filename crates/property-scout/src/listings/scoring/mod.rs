mod curves;
mod rules;
mod signals;
pub mod views;

pub use signals::{Badge, MAX_BADGES};
pub use views::{
    ComparisonMetrics, FactorGroup, FeatureComponents, ScoreBreakdown, ScoredProperty,
    SuburbComponents, ValueComponents,
};

use super::aggregates::PopulationAggregates;
use super::domain::{round_tenth, Property};
use super::suburb::SuburbMetrics;
use rules::{score_factors, ScoreSignals};

/// Scores listings against a suburb and its completed population baselines.
///
/// Construction borrows finished [`PopulationAggregates`], so scoring cannot
/// start before the whole population has been aggregated.
pub struct OpportunityScorer<'a> {
    metrics: &'a SuburbMetrics,
    aggregates: &'a PopulationAggregates,
}

impl<'a> OpportunityScorer<'a> {
    pub fn new(metrics: &'a SuburbMetrics, aggregates: &'a PopulationAggregates) -> Self {
        Self {
            metrics,
            aggregates,
        }
    }

    pub fn score(&self, property: Property) -> ScoredProperty {
        let signals = ScoreSignals::measure(&property, self.aggregates);
        let factors = score_factors(&property, self.metrics, &signals);

        let opportunity_score = round_tenth(factors.total().clamp(0.0, 100.0));
        let badges = signals::award_badges(&property, self.metrics, self.aggregates, &signals);
        let insights = signals::generate_insights(&property, self.aggregates, &signals);
        let comparison_metrics = signals::compare(&property, self.aggregates, &signals);

        ScoredProperty {
            opportunity_score,
            score_breakdown: factors.breakdown(),
            badges,
            insights,
            comparison_metrics,
            price_per_bedroom: signals.price_per_bedroom as i64,
            price_per_sqm: signals.price_per_sqm as i64,
            property,
        }
    }
}
