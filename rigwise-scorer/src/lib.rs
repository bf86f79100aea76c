//! The Rigwise scoring pipeline.
//!
//! Given pre-filtered, normalised component catalogs and a user weight
//! vector, the pipeline runs six stages strictly left to right:
//!
//! 1. **Component scoring** collapses each component's per-task raw scores
//!    into one user-weighted task score.
//! 2. **Relevance weighting** (hosted on
//!    [`RelevanceMatrix`](rigwise_core::RelevanceMatrix)) collapses the user
//!    weights into one scalar weight per component category.
//! 3. **Build generation** enumerates the full GPU × CPU × RAM cross
//!    product, pricing each triple and scoring it with a weighted harmonic
//!    mean.
//! 4. **Price filtering** retains builds inside an inclusive price range.
//! 5. **Recommendation scoring** normalises performance and price-efficiency
//!    against their batch maxima and blends them with a trade-off parameter.
//! 6. **Group reduction** keeps the best build per (GPU, CPU) pairing.
//!
//! Every stage is a pure function: full input in, new output out, no state
//! retained between invocations. Degenerate numeric cases (missing scores,
//! zero denominators, zero prices, empty batches) fall back to well-defined
//! zero or empty results rather than raising. The dominant cost is the cross
//! product in stage 3; bound catalog sizes with criteria filters *before*
//! calling into the pipeline.
//!
//! # Examples
//!
//! ```
//! use rigwise_core::{Component, ComponentSpec, CpuSpec, GpuSpec, RamSpec, Task};
//! use rigwise_scorer::{RecommendationParams, recommend_builds};
//!
//! # fn main() -> Result<(), rigwise_core::ComponentError> {
//! let gpus = vec![
//!     Component::new("RTX 4070", 550.0, 200.0, ComponentSpec::Gpu(GpuSpec { vram_gb: 12 }))?
//!         .with_task_score(Task::Gaming, 90.0),
//! ];
//! let cpus = vec![
//!     Component::new(
//!         "Ryzen 7 5700X",
//!         200.0,
//!         95.0,
//!         ComponentSpec::Cpu(CpuSpec { cores: 8, socket: "AM4".into() }),
//!     )?
//!     .with_task_score(Task::Gaming, 85.0),
//! ];
//! let rams = vec![
//!     Component::new(
//!         "DDR4-3600-32/2",
//!         100.0,
//!         10.0,
//!         ComponentSpec::Ram(RamSpec { ddr_generation: 4, capacity_gb: 32 }),
//!     )?
//!     .with_task_score(Task::Gaming, 80.0),
//! ];
//!
//! let ranked = recommend_builds(&gpus, &cpus, &rams, &RecommendationParams::default());
//! assert_eq!(ranked.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod filter;
mod generate;
mod pipeline;
mod recommend;
mod reduce;
mod score;

pub use filter::filter_by_price;
pub use generate::{generate_builds, weighted_harmonic_mean};
pub use pipeline::{RecommendationParams, recommend_builds};
pub use recommend::recommend;
pub use reduce::{best_per_pair, top_per_group};
pub use score::{ScoredComponent, score_components, task_score};
