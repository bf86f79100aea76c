//! Catalog tooling for the Rigwise engine.
//!
//! The crate owns everything that happens to component data before the
//! scoring pipeline sees it:
//!
//! - **Loading** a JSON catalog document with `gpus`, `cpus`, and `rams`
//!   record arrays into validated [`Component`](rigwise_core::Component)
//!   values.
//! - **Preprocessing**: records without a price are dropped (the scorer
//!   requires one), and every per-task score column is normalised onto a
//!   common 0-100 scale by dividing by the column maximum.
//! - **Criteria filtering**: optional per-category bounds (VRAM, core
//!   count, socket, DDR generation, capacity, power ceilings) that shrink
//!   the catalogs before the generator's cubic cross product.
//!
//! The on-disk format belongs entirely to this crate; the scoring pipeline
//! only ever sees in-memory components.

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod filters;

pub use catalog::{Catalog, load_catalog, normalise_scores};
pub use error::CatalogError;
pub use filters::{CatalogFilters, CpuFilter, GpuFilter, RamFilter};
