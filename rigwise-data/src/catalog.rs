//! JSON catalog loading and preprocessing.

use std::collections::HashMap;

use camino::Utf8Path;
use serde::Deserialize;

use rigwise_core::{Component, ComponentSpec, CpuSpec, GpuSpec, RamSpec, Task};

use crate::error::CatalogError;

/// The three preprocessed component catalogs a recommendation runs over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    /// Graphics cards.
    pub gpus: Vec<Component>,
    /// Processors.
    pub cpus: Vec<Component>,
    /// Memory kits.
    pub rams: Vec<Component>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    gpus: Vec<RawGpu>,
    #[serde(default)]
    cpus: Vec<RawCpu>,
    #[serde(default)]
    rams: Vec<RawRam>,
}

#[derive(Debug, Deserialize)]
struct RawGpu {
    name: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    power_watts: Option<f64>,
    vram_gb: u32,
    #[serde(default)]
    scores: HashMap<Task, f64>,
}

#[derive(Debug, Deserialize)]
struct RawCpu {
    name: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    power_watts: Option<f64>,
    cores: u32,
    socket: String,
    #[serde(default)]
    scores: HashMap<Task, f64>,
}

#[derive(Debug, Deserialize)]
struct RawRam {
    name: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    power_watts: Option<f64>,
    ddr_generation: u8,
    capacity_gb: u32,
    #[serde(default)]
    scores: HashMap<Task, f64>,
}

/// Load and preprocess a JSON catalog document.
///
/// Records without a price are dropped with a warning rather than failing
/// the whole load, matching how sparsely-maintained price lists behave in
/// practice. After conversion, every per-task score column is normalised
/// with [`normalise_scores`]. Malformed JSON and records that fail domain
/// validation surface as structured [`CatalogError`] values.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, the document does
/// not match the expected layout, or a record fails component validation.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let text =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let raw: RawCatalog = serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut catalog = Catalog {
        gpus: convert_records(raw.gpus, |record| {
            priced_component(
                record.name,
                record.price,
                record.power_watts,
                record.scores,
                ComponentSpec::Gpu(GpuSpec {
                    vram_gb: record.vram_gb,
                }),
            )
        })?,
        cpus: convert_records(raw.cpus, |record| {
            priced_component(
                record.name,
                record.price,
                record.power_watts,
                record.scores,
                ComponentSpec::Cpu(CpuSpec {
                    cores: record.cores,
                    socket: record.socket,
                }),
            )
        })?,
        rams: convert_records(raw.rams, |record| {
            priced_component(
                record.name,
                record.price,
                record.power_watts,
                record.scores,
                ComponentSpec::Ram(RamSpec {
                    ddr_generation: record.ddr_generation,
                    capacity_gb: record.capacity_gb,
                }),
            )
        })?,
    };

    normalise_scores(&mut catalog.gpus);
    normalise_scores(&mut catalog.cpus);
    normalise_scores(&mut catalog.rams);

    log::debug!(
        "loaded catalog from {path}: {} GPUs, {} CPUs, {} RAM kits",
        catalog.gpus.len(),
        catalog.cpus.len(),
        catalog.rams.len()
    );
    Ok(catalog)
}

fn convert_records<R, F>(records: Vec<R>, convert: F) -> Result<Vec<Component>, CatalogError>
where
    F: Fn(R) -> Result<Option<Component>, CatalogError>,
{
    let mut components = Vec::with_capacity(records.len());
    for record in records {
        if let Some(component) = convert(record)? {
            components.push(component);
        }
    }
    Ok(components)
}

/// Convert one raw record, dropping it when no price is present.
fn priced_component(
    name: String,
    price: Option<f64>,
    power_watts: Option<f64>,
    scores: HashMap<Task, f64>,
    spec: ComponentSpec,
) -> Result<Option<Component>, CatalogError> {
    let Some(price) = price else {
        log::warn!("dropping '{name}': no price in catalog");
        return Ok(None);
    };
    let mut component = Component::new(&name, price, power_watts.unwrap_or(0.0), spec)
        .map_err(|source| CatalogError::InvalidComponent { name, source })?;
    component.task_scores = scores;
    Ok(Some(component))
}

/// Normalise every per-task score column onto a 0-100 scale.
///
/// Each task's scores are divided by the column maximum and multiplied by
/// 100, so the best component per task lands at exactly 100. Columns whose
/// maximum is zero or that no component carries are left untouched, and
/// absent scores stay absent.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation rescales scores against the column maximum"
)]
pub fn normalise_scores(components: &mut [Component]) {
    for task in Task::ALL {
        let max = components
            .iter()
            .filter_map(|component| component.task_score(task))
            .fold(0.0_f64, f64::max);
        if max == 0.0 {
            continue;
        }
        for component in components.iter_mut() {
            if let Some(score) = component.task_scores.get_mut(&task) {
                *score = *score / max * 100.0;
            }
        }
    }
}
