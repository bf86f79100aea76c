//! Tests for the recommend command flow and table rendering.

use super::*;
use crate::recommend::{render_table, run_recommend};
use camino::Utf8PathBuf;
use rigwise_core::{Build, RankedBuild};
use rstest::rstest;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "gpus": [
        {
            "name": "GPU_A",
            "price": 500.0,
            "power_watts": 250.0,
            "vram_gb": 16,
            "scores": {"gaming": 90.0, "ml-ai": 90.0, "hpc": 90.0, "3d-rendering": 90.0}
        },
        {
            "name": "GPU_B",
            "price": 600.0,
            "power_watts": 300.0,
            "vram_gb": 8,
            "scores": {"gaming": 85.0, "ml-ai": 85.0, "hpc": 85.0, "3d-rendering": 85.0}
        }
    ],
    "cpus": [
        {
            "name": "CPU_A",
            "price": 200.0,
            "power_watts": 95.0,
            "cores": 8,
            "socket": "AM5",
            "scores": {"gaming": 88.0, "ml-ai": 88.0, "hpc": 88.0, "3d-rendering": 88.0}
        }
    ],
    "rams": [
        {
            "name": "RAM_A",
            "price": 100.0,
            "power_watts": 10.0,
            "ddr_generation": 5,
            "capacity_gb": 32,
            "scores": {"gaming": 85.0, "ml-ai": 85.0, "hpc": 85.0, "3d-rendering": 85.0}
        }
    ]
}"#;

fn write_catalog(dir: &TempDir) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("catalog.json"))
        .expect("utf8 catalog path");
    std::fs::write(path.as_std_path(), CATALOG).expect("write catalog fixture");
    path
}

fn ranked(gpu: &str, score: f64) -> RankedBuild {
    RankedBuild {
        build: Build {
            gpu: gpu.into(),
            cpu: "CPU_A".into(),
            ram: "RAM_A".into(),
            total_price: 800.0,
            total_power: 355.0,
            build_score: 87.6,
            score_to_price: 0.109,
        },
        normalized_performance: 1.0,
        normalized_efficiency: 1.0,
        recommendation_score: score,
    }
}

#[rstest]
fn run_recommend_renders_one_row_per_pairing() {
    let dir = TempDir::new().expect("tempdir");
    let config = RecommendConfig::try_from(RecommendArgs {
        catalog: Some(write_catalog(&dir)),
        ..RecommendArgs::default()
    })
    .expect("valid args");

    let mut out = Vec::new();
    run_recommend(&config, &mut out).expect("pipeline runs");
    let rendered = String::from_utf8(out).expect("utf8 output");

    assert!(rendered.contains("GPU"), "header row present");
    assert!(rendered.contains("GPU_A"), "affordable pairing listed");
    assert!(rendered.contains("GPU_B"), "second pairing listed");
    // Header plus one row per (GPU, CPU) pairing.
    assert_eq!(rendered.lines().count(), 3);
}

#[rstest]
fn gpu_criteria_prune_pairings() {
    let dir = TempDir::new().expect("tempdir");
    let config = RecommendConfig::try_from(RecommendArgs {
        catalog: Some(write_catalog(&dir)),
        min_vram: Some(12),
        ..RecommendArgs::default()
    })
    .expect("valid args");

    let mut out = Vec::new();
    run_recommend(&config, &mut out).expect("pipeline runs");
    let rendered = String::from_utf8(out).expect("utf8 output");

    assert!(rendered.contains("GPU_A"));
    assert!(!rendered.contains("GPU_B"), "8 GB GPU is filtered out");
}

#[rstest]
fn empty_result_prints_friendly_message() {
    let mut out = Vec::new();
    render_table(&mut out, &[], 10).expect("write succeeds");
    let rendered = String::from_utf8(out).expect("utf8 output");
    assert!(rendered.contains("No builds matched"));
}

#[rstest]
fn limit_caps_rendered_rows() {
    let entries: Vec<RankedBuild> = (0..5)
        .map(|index| ranked(&format!("GPU_{index}"), 0.9))
        .collect();
    let mut out = Vec::new();
    render_table(&mut out, &entries, 2).expect("write succeeds");
    let rendered = String::from_utf8(out).expect("utf8 output");
    assert_eq!(rendered.lines().count(), 3, "header plus two rows");
}
