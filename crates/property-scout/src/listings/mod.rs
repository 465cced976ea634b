//! Synthetic suburb listings and their opportunity rankings.
//!
//! Requests flow through [`generate`]: suburb metrics, then the full
//! population, then population aggregates, then scoring and ranking.

pub mod aggregates;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod search;
pub mod sequence;
pub mod suburb;
pub mod synthesis;

pub use aggregates::PopulationAggregates;
pub use domain::{Property, PropertyType};
pub use router::listing_router;
pub use scoring::{Badge, OpportunityScorer, ScoreBreakdown, ScoredProperty};
pub use search::{generate, rank, SearchError, SearchQuery, SearchResults};
pub use suburb::SuburbMetrics;
