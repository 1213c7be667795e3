//! Tests for PlantingService

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use vineyard::application::services::PlantingService;
use vineyard::application::ApplicationError;
use vineyard::domain::DomainError;
use vineyard::infrastructure::traits::RealFileSystem;
use vineyard::util::testing;

fn service() -> PlantingService {
    testing::init_test_setup();
    PlantingService::new(Arc::new(RealFileSystem))
}

fn write_dataset(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write dataset");
    path
}

#[test]
fn given_fixture_dataset_when_loading_then_parses_every_entry() {
    let entries = service()
        .load(Path::new("tests/resources/plantings.json"))
        .unwrap();

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].block, "A");
    assert_eq!(entries[0].varietal, "Cabernet Sauvignon");
    assert_eq!(entries[0].clone, "337");
}

#[test]
fn given_fixture_dataset_when_building_dashboard_then_all_views_agree() {
    let svc = service();
    let entries = svc.load(Path::new("tests/resources/plantings.json")).unwrap();

    let dashboard = svc.dashboard(&entries);

    assert_eq!(dashboard.stats.total_blocks, 4);
    assert_eq!(dashboard.stats.total_varietals, 5);
    assert_eq!(dashboard.stats.total_clones, 7);
    assert_eq!(dashboard.stats.most_planted_varietal, "Cabernet Sauvignon");
    assert_eq!(dashboard.stats.varietal_distribution["Cabernet Sauvignon"], 4);
    assert_eq!(dashboard.stats.varietal_distribution["Pinot Noir"], 3);
    assert_eq!(dashboard.block_tree.len(), dashboard.stats.total_blocks);
    assert_eq!(dashboard.varietal_tree.len(), dashboard.stats.total_varietals);
}

#[test]
fn given_malformed_entry_in_dataset_when_loading_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = write_dataset(&temp, "plantings.json", r#"["A.Cab.1", "A.Cab"]"#);

    let err = service().load(&path).unwrap_err();

    assert!(
        matches!(&err, ApplicationError::Domain(DomainError::MalformedEntry(raw)) if raw == "A.Cab"),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn given_invalid_json_when_loading_then_invalid_data() {
    let temp = TempDir::new().unwrap();
    let path = write_dataset(&temp, "plantings.json", r#"{"not": "an array"}"#);

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidData { .. }), "{:?}", err);
}

#[test]
fn given_missing_dataset_when_loading_then_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(p) if p == path));
}

#[test]
fn given_empty_dataset_when_building_dashboard_then_empty_views() {
    let temp = TempDir::new().unwrap();
    let path = write_dataset(&temp, "plantings.json", "[]");
    let svc = service();

    let entries = svc.load(&path).unwrap();
    let dashboard = svc.dashboard(&entries);

    assert!(dashboard.block_tree.is_empty());
    assert!(dashboard.varietal_tree.is_empty());
    assert_eq!(dashboard.stats.most_planted_varietal, "");
}

#[test]
fn given_entries_when_exporting_then_writes_csv_creating_directories() {
    let temp = TempDir::new().unwrap();
    let svc = service();
    let entries = svc.load(Path::new("tests/resources/plantings.json")).unwrap();
    let target = temp.path().join("exports/nested/vineyard-plantings.csv");

    let written = svc.export_csv(&entries, &target).unwrap();

    assert_eq!(written, target);
    let csv = std::fs::read_to_string(&target).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Block,Varietal,Clone");
    assert_eq!(lines[1], "A,Cabernet Sauvignon,337");
    assert_eq!(lines[10], "D,Pinot Noir,777");
}
