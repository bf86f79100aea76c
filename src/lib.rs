//! Facade crate for the Rigwise build recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the JSON catalog tooling behind the `catalog` feature flag.

#![forbid(unsafe_code)]

pub use rigwise_core::{
    Build, Category, Component, ComponentError, ComponentSpec, CpuSpec, GpuSpec, RamSpec,
    RankedBuild, RelevanceMatrix, RelevanceMatrixError, Task, TaskWeights,
};

pub use rigwise_scorer::{
    RecommendationParams, ScoredComponent, best_per_pair, filter_by_price, generate_builds,
    recommend, recommend_builds, score_components, task_score, top_per_group,
    weighted_harmonic_mean,
};

#[cfg(feature = "catalog")]
pub use rigwise_data::{
    Catalog, CatalogError, CatalogFilters, CpuFilter, GpuFilter, RamFilter, load_catalog,
    normalise_scores,
};
