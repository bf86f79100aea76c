//! Build generation: enumerate the full GPU × CPU × RAM cross product and
//! score every triple.

use rigwise_core::{Build, Category, RelevanceMatrix, TaskWeights};

use crate::score::ScoredComponent;

/// Weighted harmonic mean of `values` under `weights`.
///
/// Defined as `(Σw_i) / (Σ w_i / v_i)`, with two deliberate degenerate
/// cases: any value ≤ 0 makes the result exactly 0 (one worthless
/// component caps the whole build, a chain being as strong as its weakest
/// link), and a zero weighted denominator (all weights zero) also yields 0.
///
/// Both slices must have the same length; surplus entries on either side
/// are ignored.
///
/// # Examples
///
/// ```
/// use rigwise_scorer::weighted_harmonic_mean;
///
/// let mean = weighted_harmonic_mean(&[90.0, 88.0, 85.0], &[1.0, 1.0, 1.0]);
/// assert!((mean - 87.618).abs() < 1e-3);
/// assert_eq!(weighted_harmonic_mean(&[90.0, 0.0, 85.0], &[1.0, 1.0, 1.0]), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "harmonic mean aggregation over component scores"
)]
#[must_use]
pub fn weighted_harmonic_mean(values: &[f64], weights: &[f64]) -> f64 {
    if values.iter().any(|&v| v <= 0.0) {
        return 0.0;
    }
    let numerator: f64 = weights.iter().sum();
    let denominator: f64 = weights.iter().zip(values).map(|(&w, &v)| w / v).sum();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Enumerate every (GPU, CPU, RAM) triple from the scored catalogs.
///
/// The cross product is complete: no pruning, no early termination. The
/// caller bounds `|G| × |C| × |R|` through upstream criteria filtering, not
/// here. Each build sums prices and power draws, scores the triple with
/// [`weighted_harmonic_mean`] under the three category weights from
/// [`RelevanceMatrix::category_weight`], and records the raw score-to-price
/// ratio (0 for a free build).
///
/// The result is sorted by build score, descending. The sort is stable, so
/// equally-scored builds keep catalog encounter order (GPU-major, then CPU,
/// then RAM) for reproducibility.
#[expect(
    clippy::float_arithmetic,
    reason = "summing prices and power and deriving score ratios"
)]
#[must_use]
pub fn generate_builds(
    gpus: &[ScoredComponent],
    cpus: &[ScoredComponent],
    rams: &[ScoredComponent],
    weights: &TaskWeights,
    relevance: &RelevanceMatrix,
) -> Vec<Build> {
    // One weight per category; independent of the components themselves.
    let category_weights = [
        relevance.category_weight(Category::Gpu, weights),
        relevance.category_weight(Category::Cpu, weights),
        relevance.category_weight(Category::Ram, weights),
    ];

    let mut builds = Vec::with_capacity(gpus.len() * cpus.len() * rams.len());
    for gpu in gpus {
        for cpu in cpus {
            for ram in rams {
                let scores = [gpu.task_score, cpu.task_score, ram.task_score];
                let build_score = weighted_harmonic_mean(&scores, &category_weights);

                let total_price =
                    gpu.component.price + cpu.component.price + ram.component.price;
                let total_power = gpu.component.power_watts
                    + cpu.component.power_watts
                    + ram.component.power_watts;
                let score_to_price = if total_price > 0.0 {
                    build_score / total_price
                } else {
                    0.0
                };

                builds.push(Build {
                    gpu: gpu.component.name.clone(),
                    cpu: cpu.component.name.clone(),
                    ram: ram.component.name.clone(),
                    total_price,
                    total_power,
                    build_score,
                    score_to_price,
                });
            }
        }
    }

    builds.sort_by(|a, b| b.build_score.total_cmp(&a.build_score));
    log::debug!("generated {} candidate builds", builds.len());
    builds
}
