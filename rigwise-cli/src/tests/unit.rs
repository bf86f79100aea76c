//! Focused unit tests covering recommend CLI configuration validation.

use super::*;
use rstest::rstest;
use tempfile::TempDir;

fn config_for(path: Utf8PathBuf) -> RecommendConfig {
    RecommendConfig::try_from(RecommendArgs {
        catalog: Some(path),
        ..RecommendArgs::default()
    })
    .expect("catalog path is set")
}

#[rstest]
fn converting_without_catalog_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_documented_defaults() {
    let config = config_for(Utf8PathBuf::from("catalog.json"));
    assert_eq!(config.min_price, DEFAULT_MIN_PRICE);
    assert_eq!(config.max_price, DEFAULT_MAX_PRICE);
    assert_eq!(config.alpha, DEFAULT_ALPHA);
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert_eq!(config.weights, TaskWeights::new());
    assert_eq!(config.filters, CatalogFilters::default());
}

#[rstest]
fn weight_flags_override_single_tasks() {
    let config = RecommendConfig::try_from(RecommendArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        gaming: Some(9),
        hpc: Some(1),
        ..RecommendArgs::default()
    })
    .expect("valid args");
    assert_eq!(config.weights.weight(Task::Gaming), 9);
    assert_eq!(config.weights.weight(Task::Hpc), 1);
    assert_eq!(config.weights.weight(Task::MlAi), 5);
}

#[rstest]
fn validate_reports_missing_catalog_file() {
    let tmp = TempDir::new().expect("tempdir");
    let missing = Utf8PathBuf::from_path_buf(tmp.path().join("missing.json"))
        .expect("utf8 tempdir path");
    let err = config_for(missing).validate().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case(-0.1)]
#[case(1.5)]
fn validate_rejects_out_of_range_alpha(#[case] alpha: f64) {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("catalog.json");
    std::fs::write(&path, "{}").expect("write empty catalog");
    let mut config =
        config_for(Utf8PathBuf::from_path_buf(path).expect("utf8 tempdir path"));
    config.alpha = alpha;
    let err = config.validate().expect_err("alpha out of range");
    assert!(matches!(err, CliError::InvalidAlpha { .. }));
}

#[rstest]
fn validate_rejects_inverted_price_range() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("catalog.json");
    std::fs::write(&path, "{}").expect("write empty catalog");
    let mut config =
        config_for(Utf8PathBuf::from_path_buf(path).expect("utf8 tempdir path"));
    config.min_price = 900.0;
    config.max_price = 600.0;
    let err = config.validate().expect_err("inverted range");
    assert!(matches!(err, CliError::InvalidPriceRange { .. }));
}

#[rstest]
fn filter_flags_land_in_catalog_filters() {
    let config = RecommendConfig::try_from(RecommendArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        min_vram: Some(12),
        socket: Some("AM5".into()),
        ddr: Some(5),
        ..RecommendArgs::default()
    })
    .expect("valid args");
    assert_eq!(config.filters.gpu.min_vram_gb, Some(12));
    assert_eq!(config.filters.cpu.socket.as_deref(), Some("AM5"));
    assert_eq!(config.filters.ram.ddr_generation, Some(5));
}
