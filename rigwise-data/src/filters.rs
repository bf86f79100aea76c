//! Criteria filters that shrink catalogs before build generation.
//!
//! Every criterion is optional; an unset field passes everything. The
//! filters are the intended lever for keeping the generator's cubic cross
//! product tractable; there is deliberately no pruning downstream.

use serde::{Deserialize, Serialize};

use rigwise_core::{Component, ComponentSpec, CpuSpec, GpuSpec, RamSpec};

use crate::catalog::Catalog;

/// Optional GPU criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GpuFilter {
    /// Keep GPUs with at least this much VRAM, in gigabytes.
    pub min_vram_gb: Option<u32>,
    /// Keep GPUs drawing at most this much power, in watts.
    pub max_power_watts: Option<f64>,
}

impl GpuFilter {
    fn matches(&self, spec: &GpuSpec, power_watts: f64) -> bool {
        self.min_vram_gb.is_none_or(|min| spec.vram_gb >= min)
            && self.max_power_watts.is_none_or(|max| power_watts <= max)
    }

    /// Retain the GPUs satisfying every set criterion.
    ///
    /// Components without GPU attributes are dropped; they have no business
    /// in a GPU catalog.
    #[must_use]
    pub fn apply(&self, mut components: Vec<Component>) -> Vec<Component> {
        components.retain(|component| match &component.spec {
            ComponentSpec::Gpu(spec) => self.matches(spec, component.power_watts),
            ComponentSpec::Cpu(_) | ComponentSpec::Ram(_) => false,
        });
        components
    }
}

/// Optional CPU criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CpuFilter {
    /// Keep CPUs with at least this many cores.
    pub min_cores: Option<u32>,
    /// Keep CPUs drawing at most this much power, in watts.
    pub max_power_watts: Option<f64>,
    /// Keep CPUs with exactly this socket, e.g. `AM5`.
    pub socket: Option<String>,
}

impl CpuFilter {
    fn matches(&self, spec: &CpuSpec, power_watts: f64) -> bool {
        self.min_cores.is_none_or(|min| spec.cores >= min)
            && self.max_power_watts.is_none_or(|max| power_watts <= max)
            && self
                .socket
                .as_ref()
                .is_none_or(|socket| spec.socket == *socket)
    }

    /// Retain the CPUs satisfying every set criterion.
    #[must_use]
    pub fn apply(&self, mut components: Vec<Component>) -> Vec<Component> {
        components.retain(|component| match &component.spec {
            ComponentSpec::Cpu(spec) => self.matches(spec, component.power_watts),
            ComponentSpec::Gpu(_) | ComponentSpec::Ram(_) => false,
        });
        components
    }
}

/// Optional RAM criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RamFilter {
    /// Keep kits of exactly this DDR generation, e.g. 4 or 5.
    pub ddr_generation: Option<u8>,
    /// Keep kits with at least this capacity, in gigabytes.
    pub min_capacity_gb: Option<u32>,
}

impl RamFilter {
    fn matches(&self, spec: &RamSpec) -> bool {
        self.ddr_generation
            .is_none_or(|generation| spec.ddr_generation == generation)
            && self
                .min_capacity_gb
                .is_none_or(|min| spec.capacity_gb >= min)
    }

    /// Retain the RAM kits satisfying every set criterion.
    #[must_use]
    pub fn apply(&self, mut components: Vec<Component>) -> Vec<Component> {
        components.retain(|component| match &component.spec {
            ComponentSpec::Ram(spec) => self.matches(spec),
            ComponentSpec::Gpu(_) | ComponentSpec::Cpu(_) => false,
        });
        components
    }
}

/// The three per-category criteria sets applied together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogFilters {
    /// GPU criteria.
    #[serde(default)]
    pub gpu: GpuFilter,
    /// CPU criteria.
    #[serde(default)]
    pub cpu: CpuFilter,
    /// RAM criteria.
    #[serde(default)]
    pub ram: RamFilter,
}

impl CatalogFilters {
    /// Filter a whole catalog in one pass.
    #[must_use]
    pub fn apply(&self, catalog: Catalog) -> Catalog {
        let filtered = Catalog {
            gpus: self.gpu.apply(catalog.gpus),
            cpus: self.cpu.apply(catalog.cpus),
            rams: self.ram.apply(catalog.rams),
        };
        log::debug!(
            "criteria filters kept {} GPUs, {} CPUs, {} RAM kits",
            filtered.gpus.len(),
            filtered.cpus.len(),
            filtered.rams.len()
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]

    use super::*;
    use rstest::rstest;

    fn gpu(name: &str, vram_gb: u32, power_watts: f64) -> Component {
        Component::new(
            name,
            500.0,
            power_watts,
            ComponentSpec::Gpu(GpuSpec { vram_gb }),
        )
        .expect("valid gpu")
    }

    fn cpu(name: &str, cores: u32, socket: &str, power_watts: f64) -> Component {
        Component::new(
            name,
            250.0,
            power_watts,
            ComponentSpec::Cpu(CpuSpec {
                cores,
                socket: socket.into(),
            }),
        )
        .expect("valid cpu")
    }

    fn ram(name: &str, ddr_generation: u8, capacity_gb: u32) -> Component {
        Component::new(
            name,
            100.0,
            10.0,
            ComponentSpec::Ram(RamSpec {
                ddr_generation,
                capacity_gb,
            }),
        )
        .expect("valid ram")
    }

    #[rstest]
    fn unset_criteria_pass_everything() {
        let gpus = vec![gpu("GPU_A", 8, 300.0), gpu("GPU_B", 16, 450.0)];
        assert_eq!(GpuFilter::default().apply(gpus).len(), 2);
    }

    #[rstest]
    #[case(Some(12), None, &["GPU_B"])]
    #[case(None, Some(350.0), &["GPU_A"])]
    #[case(Some(8), Some(500.0), &["GPU_A", "GPU_B"])]
    fn gpu_criteria_are_inclusive_bounds(
        #[case] min_vram_gb: Option<u32>,
        #[case] max_power_watts: Option<f64>,
        #[case] expected: &[&str],
    ) {
        let filter = GpuFilter {
            min_vram_gb,
            max_power_watts,
        };
        let kept = filter.apply(vec![gpu("GPU_A", 8, 300.0), gpu("GPU_B", 16, 450.0)]);
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn cpu_socket_is_an_exact_match() {
        let filter = CpuFilter {
            socket: Some("AM5".into()),
            ..CpuFilter::default()
        };
        let kept = filter.apply(vec![
            cpu("CPU_AM4", 8, "AM4", 65.0),
            cpu("CPU_AM5", 8, "AM5", 105.0),
        ]);
        assert_eq!(kept.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["CPU_AM5"]);
    }

    #[rstest]
    fn ram_generation_and_capacity_combine() {
        let filter = RamFilter {
            ddr_generation: Some(5),
            min_capacity_gb: Some(32),
        };
        let kept = filter.apply(vec![
            ram("DDR4-3600-64/4", 4, 64),
            ram("DDR5-6000-16/2", 5, 16),
            ram("DDR5-6000-32/2", 5, 32),
        ]);
        assert_eq!(
            kept.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["DDR5-6000-32/2"]
        );
    }

    #[rstest]
    fn miscategorised_components_are_dropped() {
        let kept = GpuFilter::default().apply(vec![gpu("GPU_A", 8, 300.0), ram("RAM_A", 5, 32)]);
        assert_eq!(kept.len(), 1);
    }

    #[rstest]
    fn catalog_filters_apply_per_category() {
        let catalog = Catalog {
            gpus: vec![gpu("GPU_A", 8, 300.0), gpu("GPU_B", 16, 450.0)],
            cpus: vec![cpu("CPU_AM4", 8, "AM4", 65.0), cpu("CPU_AM5", 12, "AM5", 105.0)],
            rams: vec![ram("DDR4-3600-32/2", 4, 32), ram("DDR5-6000-32/2", 5, 32)],
        };
        let filters = CatalogFilters {
            gpu: GpuFilter {
                min_vram_gb: Some(12),
                max_power_watts: None,
            },
            cpu: CpuFilter {
                min_cores: Some(10),
                max_power_watts: None,
                socket: None,
            },
            ram: RamFilter {
                ddr_generation: Some(5),
                min_capacity_gb: None,
            },
        };
        let filtered = filters.apply(catalog);
        assert_eq!(filtered.gpus.len(), 1);
        assert_eq!(filtered.cpus.len(), 1);
        assert_eq!(filtered.rams.len(), 1);
    }
}
