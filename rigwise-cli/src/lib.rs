//! Command-line interface for the Rigwise build recommender.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use rigwise_core::{Task, TaskWeights};
use rigwise_data::{CatalogError, CatalogFilters, CpuFilter, GpuFilter, RamFilter};

mod recommend;

const ARG_CATALOG: &str = "catalog";
const ENV_CATALOG: &str = "RIGWISE_CMDS_RECOMMEND_CATALOG";

const DEFAULT_MIN_PRICE: f64 = 500.0;
const DEFAULT_MAX_PRICE: f64 = 2000.0;
const DEFAULT_ALPHA: f64 = 0.6;
const DEFAULT_LIMIT: usize = 10;

/// Run the Rigwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// catalog loading, or output rendering fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => {
            let config = args.into_config()?;
            config.validate()?;
            let stdout = std::io::stdout();
            recommend::run_recommend(&config, &mut stdout.lock())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rigwise",
    about = "Recommend GPU/CPU/RAM builds for weighted task priorities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a component catalog and print the best builds per pairing.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a JSON component catalog, score it against the given \
                 task weights, and print the best build per (GPU, CPU) \
                 pairing inside the price range. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Recommend builds from a component catalog"
)]
#[ortho_config(prefix = "RIGWISE")]
struct RecommendArgs {
    /// Path to the JSON component catalog.
    #[arg(value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
    /// Priority for gaming workloads, 0-10.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    gaming: Option<u8>,
    /// Priority for ML/AI workloads, 0-10.
    #[arg(long = "ml-ai", value_name = "weight")]
    #[serde(default)]
    ml_ai: Option<u8>,
    /// Priority for high-precision computing workloads, 0-10.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    hpc: Option<u8>,
    /// Priority for 3D rendering workloads, 0-10.
    #[arg(long = "rendering", value_name = "weight")]
    #[serde(default)]
    rendering: Option<u8>,
    /// Inclusive lower bound of the build price range.
    #[arg(long = "min-price", value_name = "price")]
    #[serde(default)]
    min_price: Option<f64>,
    /// Inclusive upper bound of the build price range.
    #[arg(long = "max-price", value_name = "price")]
    #[serde(default)]
    max_price: Option<f64>,
    /// Performance/efficiency trade-off between 0 (cheapest) and 1 (fastest).
    #[arg(long, value_name = "alpha")]
    #[serde(default)]
    alpha: Option<f64>,
    /// Maximum number of rows to print.
    #[arg(long, value_name = "rows")]
    #[serde(default)]
    limit: Option<usize>,
    /// Keep GPUs with at least this much VRAM, in gigabytes.
    #[arg(long = "min-vram", value_name = "gb")]
    #[serde(default)]
    min_vram: Option<u32>,
    /// Keep GPUs drawing at most this much power, in watts.
    #[arg(long = "max-gpu-power", value_name = "watts")]
    #[serde(default)]
    max_gpu_power: Option<f64>,
    /// Keep CPUs with at least this many cores.
    #[arg(long = "min-cores", value_name = "cores")]
    #[serde(default)]
    min_cores: Option<u32>,
    /// Keep CPUs drawing at most this much power, in watts.
    #[arg(long = "max-cpu-power", value_name = "watts")]
    #[serde(default)]
    max_cpu_power: Option<f64>,
    /// Keep CPUs with exactly this socket, e.g. AM5.
    #[arg(long, value_name = "socket")]
    #[serde(default)]
    socket: Option<String>,
    /// Keep RAM kits of exactly this DDR generation.
    #[arg(long, value_name = "generation")]
    #[serde(default)]
    ddr: Option<u8>,
    /// Keep RAM kits with at least this capacity, in gigabytes.
    #[arg(long = "min-ram-capacity", value_name = "gb")]
    #[serde(default)]
    min_ram_capacity: Option<u32>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
struct RecommendConfig {
    /// Path to the JSON catalog file.
    catalog: Utf8PathBuf,
    /// Per-task user priorities.
    weights: TaskWeights,
    /// Inclusive build price range.
    min_price: f64,
    /// Inclusive upper price bound.
    max_price: f64,
    /// Performance/efficiency trade-off.
    alpha: f64,
    /// Maximum rows rendered.
    limit: usize,
    /// Per-category criteria filters.
    filters: CatalogFilters,
}

impl RecommendConfig {
    fn validate(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(CliError::InvalidAlpha { value: self.alpha });
        }
        if self.min_price > self.max_price {
            return Err(CliError::InvalidPriceRange {
                min: self.min_price,
                max: self.max_price,
            });
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;

        let mut weights = TaskWeights::new();
        for (task, weight) in [
            (Task::Gaming, args.gaming),
            (Task::MlAi, args.ml_ai),
            (Task::Hpc, args.hpc),
            (Task::Rendering3d, args.rendering),
        ] {
            if let Some(weight) = weight {
                weights.set_weight(task, weight);
            }
        }

        let filters = CatalogFilters {
            gpu: GpuFilter {
                min_vram_gb: args.min_vram,
                max_power_watts: args.max_gpu_power,
            },
            cpu: CpuFilter {
                min_cores: args.min_cores,
                max_power_watts: args.max_cpu_power,
                socket: args.socket,
            },
            ram: RamFilter {
                ddr_generation: args.ddr,
                min_capacity_gb: args.min_ram_capacity,
            },
        };

        Ok(Self {
            catalog,
            weights,
            min_price: args.min_price.unwrap_or(DEFAULT_MIN_PRICE),
            max_price: args.max_price.unwrap_or(DEFAULT_MAX_PRICE),
            alpha: args.alpha.unwrap_or(DEFAULT_ALPHA),
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            filters,
        })
    }
}

/// Errors emitted by the Rigwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable fallback.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// The trade-off parameter fell outside `[0, 1]`.
    #[error("alpha must be between 0 and 1, got {value}")]
    InvalidAlpha {
        /// Offending value.
        value: f64,
    },
    /// The price range was inverted.
    #[error("price range is inverted: min {min} exceeds max {max}")]
    InvalidPriceRange {
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
    /// Loading the component catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Writing the result table failed.
    #[error("failed to write results")]
    Render(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
