use clap::Args;
use property_scout::config::AppConfig;
use property_scout::error::AppError;
use property_scout::listings::{generate, ScoredProperty, SearchQuery, SearchResults};
use std::io::Write;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Suburb to rank listings for
    pub(crate) suburb: String,
    /// Number of ranked listings to skip
    #[arg(long, default_value_t = 0)]
    pub(crate) offset: usize,
    /// Page size (defaults to the configured search limit)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit the raw JSON document instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        suburb,
        offset,
        limit,
        json,
    } = args;

    let config = AppConfig::load()?;
    let limit = config.search.resolve_limit(limit);
    let query = SearchQuery::new(&suburb, offset, limit)?;
    let results = generate(&query);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &results).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        render_search_results(&mut out, &results)?;
    }

    Ok(())
}

pub(crate) fn render_search_results(
    out: &mut impl Write,
    results: &SearchResults,
) -> std::io::Result<()> {
    let metrics = &results.suburb_metrics;
    writeln!(out, "Opportunity ranking for {}", results.suburb)?;
    writeln!(
        out,
        "Suburb score {} | walkability {} | population growth {:.1}%",
        metrics.suburb_score, metrics.walkability, metrics.population_growth
    )?;
    writeln!(
        out,
        "Showing {} of {} listings (offset {}){}",
        results.count,
        results.total,
        results.offset,
        if results.has_more {
            ", more available"
        } else {
            ""
        }
    )?;

    if results.properties.is_empty() {
        writeln!(out, "\nNo listings in this window.")?;
        return Ok(());
    }

    for (position, scored) in results.properties.iter().enumerate() {
        render_listing(out, results.offset + position + 1, scored)?;
    }

    Ok(())
}

fn render_listing(
    out: &mut impl Write,
    rank: usize,
    scored: &ScoredProperty,
) -> std::io::Result<()> {
    let property = &scored.property;
    let breakdown = &scored.score_breakdown;

    writeln!(
        out,
        "\n#{rank} {:>5.1}  {}",
        scored.opportunity_score, property.address
    )?;
    writeln!(
        out,
        "    {} | ${} | {} bed / {} bath / {} car | {} days on market",
        property.property_type,
        property.price,
        property.bedrooms,
        property.bathrooms,
        property.parking_spaces,
        property.days_on_market
    )?;
    writeln!(
        out,
        "    suburb {:.1}/{} | value {:.1}/{} | features {:.1}/{}",
        breakdown.suburb_factors.total,
        breakdown.suburb_factors.max,
        breakdown.value_factors.total,
        breakdown.value_factors.max,
        breakdown.feature_factors.total,
        breakdown.feature_factors.max
    )?;

    if !scored.badges.is_empty() {
        let badges: Vec<&str> = scored.badges.iter().map(|badge| badge.label()).collect();
        writeln!(out, "    badges: {}", badges.join(", "))?;
    }
    for insight in &scored.insights {
        writeln!(out, "    - {insight}")?;
    }

    Ok(())
}
