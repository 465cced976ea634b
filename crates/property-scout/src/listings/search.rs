use super::aggregates::PopulationAggregates;
use super::domain::Property;
use super::scoring::{OpportunityScorer, ScoredProperty};
use super::suburb::SuburbMetrics;
use super::synthesis::synthesize_population;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please provide a suburb name")]
    MissingSuburb,
    #[error("limit must be at least 1")]
    InvalidLimit,
}

/// A validated request for one page of a suburb's ranked listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    suburb: String,
    offset: usize,
    limit: usize,
}

impl SearchQuery {
    pub fn new(suburb: &str, offset: usize, limit: usize) -> Result<Self, SearchError> {
        let suburb = suburb.trim();
        if suburb.is_empty() {
            return Err(SearchError::MissingSuburb);
        }
        if limit == 0 {
            return Err(SearchError::InvalidLimit);
        }

        Ok(Self {
            suburb: suburb.to_string(),
            offset,
            limit,
        })
    }

    pub fn suburb(&self) -> &str {
        &self.suburb
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// One page of ranked listings plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub suburb: String,
    pub suburb_metrics: SuburbMetrics,
    pub properties: Vec<ScoredProperty>,
    pub count: usize,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// Synthesizes, scores and ranks the suburb's full population, then slices
/// out the requested window.
pub fn generate(query: &SearchQuery) -> SearchResults {
    let suburb = query.suburb();
    let suburb_metrics = SuburbMetrics::for_suburb(suburb);

    let population = synthesize_population(suburb, &suburb_metrics);
    let aggregates = PopulationAggregates::from_population(&population);
    let ranked = rank(population, &suburb_metrics, &aggregates);

    let total = ranked.len();
    debug!(
        suburb,
        total,
        median_price = aggregates.median_price,
        "ranked synthetic listing population"
    );

    let properties: Vec<ScoredProperty> = ranked
        .into_iter()
        .skip(query.offset())
        .take(query.limit())
        .collect();

    SearchResults {
        suburb: suburb.to_string(),
        suburb_metrics,
        count: properties.len(),
        total,
        offset: query.offset(),
        limit: query.limit(),
        has_more: query.offset().saturating_add(query.limit()) < total,
        properties,
    }
}

/// Scores every listing and orders them best first; ties keep synthesis order.
pub fn rank(
    population: Vec<Property>,
    metrics: &SuburbMetrics,
    aggregates: &PopulationAggregates,
) -> Vec<ScoredProperty> {
    let scorer = OpportunityScorer::new(metrics, aggregates);
    let mut ranked: Vec<ScoredProperty> = population
        .into_iter()
        .map(|property| scorer.score(property))
        .collect();
    ranked.sort_by(|a, b| b.opportunity_score.total_cmp(&a.opportunity_score));
    ranked
}
