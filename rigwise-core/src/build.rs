//! Builds: concrete GPU + CPU + RAM combinations with derived metrics.

/// One complete build enumerated by the generator.
///
/// Identity for grouping purposes is the (GPU name, CPU name) pair; the RAM
/// choice is what the group reducer collapses over.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    /// GPU name.
    pub gpu: String,
    /// CPU name.
    pub cpu: String,
    /// RAM kit name.
    pub ram: String,
    /// Sum of the three component prices.
    pub total_price: f64,
    /// Sum of the three component power draws, in watts.
    pub total_power: f64,
    /// Weighted harmonic mean of the three component task scores.
    pub build_score: f64,
    /// `build_score / total_price`, or 0 when the build is free.
    pub score_to_price: f64,
}

impl Build {
    /// The (GPU, CPU) pair this build belongs to for group reduction.
    pub fn pair_key(&self) -> (&str, &str) {
        (&self.gpu, &self.cpu)
    }
}

/// A build augmented with batch-normalised metrics and the composite
/// recommendation score.
///
/// Constructed as a fresh record by the recommendation scorer; the
/// underlying [`Build`] is never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedBuild {
    /// The underlying build.
    pub build: Build,
    /// `build_score` divided by the batch maximum, 0 when that maximum is 0.
    pub normalized_performance: f64,
    /// `score_to_price` divided by the batch maximum, 0 when that maximum
    /// is 0.
    pub normalized_efficiency: f64,
    /// `alpha * normalized_performance + (1 - alpha) * normalized_efficiency`.
    pub recommendation_score: f64,
}
