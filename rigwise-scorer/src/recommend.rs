//! Composite recommendation scoring: blend normalised performance with
//! normalised price-efficiency.

use rigwise_core::{Build, RankedBuild};

/// Rank builds by a composite of performance and price-efficiency.
///
/// Both metrics are normalised against their maxima over this batch, then
/// blended: `alpha * performance + (1 - alpha) * efficiency`. An `alpha`
/// close to 1 favours raw performance, close to 0 favours value for money.
/// The caller guarantees `alpha ∈ [0, 1]`; the core does not validate it.
///
/// An empty input short-circuits to an empty output. A batch maximum of 0
/// normalises that metric to 0 for every build rather than dividing by
/// zero. The result is re-sorted by recommendation score, descending and
/// stable.
///
/// Ranking is idempotent: feeding the output's builds back in with the same
/// `alpha` reproduces the same relative order, since already-normalised
/// maxima recompute to 1.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation and blending of batch score maxima"
)]
#[must_use]
pub fn recommend(builds: Vec<Build>, alpha: f64) -> Vec<RankedBuild> {
    if builds.is_empty() {
        return Vec::new();
    }

    let p_max = builds
        .iter()
        .map(|build| build.build_score)
        .fold(0.0_f64, f64::max);
    let e_max = builds
        .iter()
        .map(|build| build.score_to_price)
        .fold(0.0_f64, f64::max);

    let mut ranked: Vec<RankedBuild> = builds
        .into_iter()
        .map(|build| {
            let normalized_performance = if p_max == 0.0 {
                0.0
            } else {
                build.build_score / p_max
            };
            let normalized_efficiency = if e_max == 0.0 {
                0.0
            } else {
                build.score_to_price / e_max
            };
            let recommendation_score =
                alpha * normalized_performance + (1.0 - alpha) * normalized_efficiency;
            RankedBuild {
                build,
                normalized_performance,
                normalized_efficiency,
                recommendation_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
    ranked
}
