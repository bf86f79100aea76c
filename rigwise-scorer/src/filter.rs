//! Price filtering over generated builds.

use rigwise_core::Build;

/// Retain builds whose total price lies within `min_price..=max_price`.
///
/// Both bounds are inclusive and the relative order of survivors is
/// preserved, so the input's score-descending order carries through. An
/// inverted range (`min_price > max_price`) simply matches nothing; range
/// sanity is the caller's responsibility, not an error here. Applying the
/// same filter twice is a no-op.
///
/// # Examples
///
/// ```
/// use rigwise_core::Build;
/// use rigwise_scorer::filter_by_price;
///
/// let build = Build {
///     gpu: "GPU_A".into(),
///     cpu: "CPU_A".into(),
///     ram: "RAM_A".into(),
///     total_price: 800.0,
///     total_power: 355.0,
///     build_score: 87.6,
///     score_to_price: 0.109,
/// };
/// assert_eq!(filter_by_price(vec![build.clone()], 600.0, 900.0).len(), 1);
/// assert!(filter_by_price(vec![build], 900.0, 600.0).is_empty());
/// ```
#[must_use]
pub fn filter_by_price(mut builds: Vec<Build>, min_price: f64, max_price: f64) -> Vec<Build> {
    builds.retain(|build| build.total_price >= min_price && build.total_price <= max_price);
    log::debug!(
        "{} builds within price range {min_price}..={max_price}",
        builds.len()
    );
    builds
}
