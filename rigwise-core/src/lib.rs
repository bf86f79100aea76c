//! Core domain types for the Rigwise build recommendation engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early;
//! the scoring pipeline itself never raises on degenerate numeric data.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod build;
pub mod component;
pub mod relevance;
pub mod task;
pub mod weights;

pub use build::{Build, RankedBuild};
pub use component::{
    Category, Component, ComponentError, ComponentSpec, CpuSpec, GpuSpec, RamSpec,
};
pub use relevance::{RelevanceMatrix, RelevanceMatrixError};
pub use task::Task;
pub use weights::TaskWeights;
