//! One-shot pipeline orchestration for callers that want the whole chain.

use rigwise_core::{Component, RankedBuild, RelevanceMatrix, TaskWeights};

use crate::filter::filter_by_price;
use crate::generate::generate_builds;
use crate::recommend::recommend;
use crate::reduce::best_per_pair;
use crate::score::score_components;

/// Everything the pipeline needs beyond the catalogs themselves.
///
/// The defaults mirror the shipped front-end: mid-scale task weights, the
/// stock relevance matrix, a 500-2000 price bracket, and a trade-off
/// parameter leaning towards performance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationParams {
    /// User priority per task.
    pub weights: TaskWeights,
    /// Category relevance coefficients.
    pub relevance: RelevanceMatrix,
    /// Inclusive lower price bound.
    pub min_price: f64,
    /// Inclusive upper price bound.
    pub max_price: f64,
    /// Performance/efficiency trade-off in `[0, 1]`; validated by the
    /// caller, not here.
    pub alpha: f64,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            weights: TaskWeights::new(),
            relevance: RelevanceMatrix::default(),
            min_price: 500.0,
            max_price: 2000.0,
            alpha: 0.6,
        }
    }
}

/// Run the full pipeline: score, generate, price-filter, rank, reduce.
///
/// A single-shot batch computation over immutable inputs; call it again
/// from scratch whenever weights, bounds, or catalogs change. Empty
/// catalogs or an empty surviving build set propagate through to an empty
/// result without raising.
#[must_use]
pub fn recommend_builds(
    gpus: &[Component],
    cpus: &[Component],
    rams: &[Component],
    params: &RecommendationParams,
) -> Vec<RankedBuild> {
    let scored_gpus = score_components(gpus, &params.weights);
    let scored_cpus = score_components(cpus, &params.weights);
    let scored_rams = score_components(rams, &params.weights);

    let builds = generate_builds(
        &scored_gpus,
        &scored_cpus,
        &scored_rams,
        &params.weights,
        &params.relevance,
    );
    let affordable = filter_by_price(builds, params.min_price, params.max_price);
    let ranked = recommend(affordable, params.alpha);
    best_per_pair(ranked)
}
