//! Recommend command implementation for the Rigwise CLI.

use std::io::Write;

use rigwise_core::{RankedBuild, RelevanceMatrix};
use rigwise_data::load_catalog;
use rigwise_scorer::{RecommendationParams, recommend_builds};

use crate::{CliError, RecommendConfig};

/// Load the catalog, run the pipeline, and render the ranked table.
pub(crate) fn run_recommend<W: Write>(
    config: &RecommendConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let filtered = config.filters.apply(catalog);

    let params = RecommendationParams {
        weights: config.weights.clone(),
        relevance: RelevanceMatrix::default(),
        min_price: config.min_price,
        max_price: config.max_price,
        alpha: config.alpha,
    };
    let ranked = recommend_builds(&filtered.gpus, &filtered.cpus, &filtered.rams, &params);
    log::debug!("{} pairings ranked", ranked.len());

    render_table(out, &ranked, config.limit)?;
    Ok(())
}

/// Print up to `limit` ranked builds as a fixed-width table.
pub(crate) fn render_table<W: Write>(
    out: &mut W,
    ranked: &[RankedBuild],
    limit: usize,
) -> Result<(), std::io::Error> {
    if ranked.is_empty() {
        writeln!(out, "No builds matched the given criteria and price range.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<28} {:<24} {:<18} {:>9} {:>7} {:>7} {:>10}",
        "GPU", "CPU", "RAM", "Price", "Power", "Score", "Recommend"
    )?;
    for entry in ranked.iter().take(limit) {
        writeln!(
            out,
            "{:<28} {:<24} {:<18} {:>9.2} {:>7.0} {:>7.1} {:>10.4}",
            entry.build.gpu,
            entry.build.cpu,
            entry.build.ram,
            entry.build.total_price,
            entry.build.total_power,
            entry.build.build_score,
            entry.recommendation_score,
        )?;
    }
    Ok(())
}
