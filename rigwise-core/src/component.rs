//! Catalog components: GPUs, CPUs, and RAM kits with prices, power draw,
//! per-task scores, and the category-specific attributes used by criteria
//! filtering.

use std::collections::HashMap;

use thiserror::Error;

use crate::Task;

/// The component categories a build is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Graphics cards.
    Gpu,
    /// Processors.
    Cpu,
    /// Memory kits.
    Ram,
}

impl Category {
    /// Every category, in build order.
    pub const ALL: [Self; 3] = [Self::Gpu, Self::Cpu, Self::Ram];

    /// Return the category as an uppercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gpu => "GPU",
            Self::Cpu => "CPU",
            Self::Ram => "RAM",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GPU attributes consulted by criteria filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpuSpec {
    /// Video memory capacity in gigabytes.
    pub vram_gb: u32,
}

/// CPU attributes consulted by criteria filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuSpec {
    /// Physical core count.
    pub cores: u32,
    /// Socket designation, e.g. `AM5`.
    pub socket: String,
}

/// RAM attributes consulted by criteria filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RamSpec {
    /// DDR generation, e.g. 4 or 5.
    pub ddr_generation: u8,
    /// Total kit capacity in gigabytes.
    pub capacity_gb: u32,
}

/// Category-specific attributes of a component.
///
/// The scoring pipeline never inspects these; they exist for the criteria
/// filters that bound catalog sizes before build generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentSpec {
    /// Graphics card attributes.
    Gpu(GpuSpec),
    /// Processor attributes.
    Cpu(CpuSpec),
    /// Memory kit attributes.
    Ram(RamSpec),
}

impl ComponentSpec {
    /// Return the category this spec belongs to.
    pub const fn category(&self) -> Category {
        match self {
            Self::Gpu(_) => Category::Gpu,
            Self::Cpu(_) => Category::Cpu,
            Self::Ram(_) => Category::Ram,
        }
    }
}

/// Errors returned by [`Component::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// The component name was empty or whitespace.
    #[error("component name must not be empty")]
    EmptyName,
    /// The price was negative or not finite.
    #[error("component price must be a non-negative finite number")]
    InvalidPrice,
    /// The power draw was negative or not finite.
    #[error("component power draw must be a non-negative finite number")]
    InvalidPower,
}

/// One catalog entry for a GPU, CPU, or RAM kit.
///
/// Per-task scores are stored sparsely: a task with no score is absent from
/// the map, and the scorer treats it as missing rather than zero.
///
/// # Examples
/// ```
/// use rigwise_core::{Component, ComponentSpec, GpuSpec, Task};
///
/// # fn main() -> Result<(), rigwise_core::ComponentError> {
/// let gpu = Component::new(
///     "RTX 4070 Super",
///     599.0,
///     220.0,
///     ComponentSpec::Gpu(GpuSpec { vram_gb: 12 }),
/// )?
/// .with_task_score(Task::Gaming, 91.0);
/// assert_eq!(gpu.task_score(Task::Gaming), Some(91.0));
/// assert_eq!(gpu.task_score(Task::Hpc), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// Identifying name, unique within its catalog.
    pub name: String,
    /// Retail price after preprocessing. Non-negative.
    pub price: f64,
    /// Power draw in watts. Non-negative.
    pub power_watts: f64,
    /// Raw per-task scores on the common 0-100 scale. Sparse.
    pub task_scores: HashMap<Task, f64>,
    /// Category-specific attributes used by criteria filtering.
    pub spec: ComponentSpec,
}

impl Component {
    /// Validates and constructs a [`Component`] with no task scores.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        power_watts: f64,
        spec: ComponentSpec,
    ) -> Result<Self, ComponentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ComponentError::EmptyName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(ComponentError::InvalidPrice);
        }
        if !power_watts.is_finite() || power_watts < 0.0 {
            return Err(ComponentError::InvalidPower);
        }
        Ok(Self {
            name,
            price,
            power_watts,
            task_scores: HashMap::new(),
            spec,
        })
    }

    /// Return this component's category.
    pub const fn category(&self) -> Category {
        self.spec.category()
    }

    /// Return the raw score for a task, if the catalog carries one.
    pub fn task_score(&self, task: Task) -> Option<f64> {
        self.task_scores.get(&task).copied()
    }

    /// Add a raw task score while returning `self` for chaining.
    pub fn with_task_score(mut self, task: Task, score: f64) -> Self {
        self.task_scores.insert(task, score);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ram_spec() -> ComponentSpec {
        ComponentSpec::Ram(RamSpec {
            ddr_generation: 5,
            capacity_gb: 32,
        })
    }

    #[rstest]
    fn rejects_empty_name() {
        let result = Component::new("   ", 100.0, 10.0, ram_spec());
        assert_eq!(result.unwrap_err(), ComponentError::EmptyName);
    }

    #[rstest]
    #[case(-1.0, ComponentError::InvalidPrice)]
    #[case(f64::NAN, ComponentError::InvalidPrice)]
    #[case(f64::INFINITY, ComponentError::InvalidPrice)]
    fn rejects_bad_price(#[case] price: f64, #[case] expected: ComponentError) {
        let result = Component::new("DDR5-6000-32/2", price, 10.0, ram_spec());
        assert_eq!(result.unwrap_err(), expected);
    }

    #[rstest]
    fn rejects_negative_power() {
        let result = Component::new("DDR5-6000-32/2", 100.0, -5.0, ram_spec());
        assert_eq!(result.unwrap_err(), ComponentError::InvalidPower);
    }

    #[rstest]
    fn missing_task_score_is_absent_not_zero() {
        let ram = Component::new("DDR5-6000-32/2", 100.0, 10.0, ram_spec())
            .unwrap()
            .with_task_score(Task::Gaming, 80.0);
        assert_eq!(ram.task_score(Task::Gaming), Some(80.0));
        assert_eq!(ram.task_score(Task::MlAi), None);
    }

    #[rstest]
    fn spec_reports_category() {
        let ram = Component::new("DDR5-6000-32/2", 100.0, 10.0, ram_spec()).unwrap();
        assert_eq!(ram.category(), Category::Ram);
    }
}
