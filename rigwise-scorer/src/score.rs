//! Component scoring: collapse per-task raw scores into one user-weighted
//! task score per component.

use rigwise_core::{Component, TaskWeights};

/// A component paired with its derived task score.
///
/// Immutable once created; recompute the whole batch whenever the user
/// weight vector changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredComponent {
    /// The underlying catalog record, untouched by scoring.
    pub component: Component,
    /// User-weighted average of the component's per-task scores.
    pub task_score: f64,
}

/// Compute the user-weighted average of a component's per-task scores.
///
/// Tasks the component carries no score for are skipped entirely: they
/// contribute to neither the numerator nor the denominator, so a missing
/// score never drags the average towards zero. When nothing matches, or
/// every weight is zero, the score is 0.
///
/// # Examples
///
/// ```
/// use rigwise_core::{Component, ComponentSpec, GpuSpec, Task, TaskWeights};
/// use rigwise_scorer::task_score;
///
/// # fn main() -> Result<(), rigwise_core::ComponentError> {
/// let gpu = Component::new("GPU_A", 500.0, 250.0, ComponentSpec::Gpu(GpuSpec { vram_gb: 16 }))?
///     .with_task_score(Task::Gaming, 90.0)
///     .with_task_score(Task::MlAi, 70.0);
/// let weights = TaskWeights::new()
///     .with_weight(Task::Gaming, 8)
///     .with_weight(Task::MlAi, 2)
///     .with_weight(Task::Hpc, 0)
///     .with_weight(Task::Rendering3d, 0);
/// // (8 * 90 + 2 * 70) / (8 + 2)
/// assert!((task_score(&gpu, &weights) - 86.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "weighted averaging of raw task scores"
)]
#[must_use]
pub fn task_score(component: &Component, weights: &TaskWeights) -> f64 {
    let mut numerator = 0.0_f64;
    let mut denominator = 0.0_f64;
    for (task, weight) in weights.iter() {
        let Some(raw) = component.task_score(task) else {
            continue;
        };
        let weight = f64::from(weight);
        numerator += weight * raw;
        denominator += weight;
    }
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Score every component in a catalog against the user weight vector.
///
/// The records themselves are copied unchanged; only the derived score is
/// added alongside them.
#[must_use]
pub fn score_components(catalog: &[Component], weights: &TaskWeights) -> Vec<ScoredComponent> {
    catalog
        .iter()
        .map(|component| ScoredComponent {
            component: component.clone(),
            task_score: task_score(component, weights),
        })
        .collect()
}
