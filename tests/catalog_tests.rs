//! Integration tests for catalog loading and validation.

use solovina::catalog::{builtin, load_catalog, load_or_builtin};
use solovina::error::CatalogErrorKind;
use solovina::{Month, ShowcaseError};
use std::fs;
use tempfile::TempDir;

const CATALOG_YAML: &str = r##"
projects:
  - id: florence
    name: Florence
    status: released
    status_label: "Вийшов"
    color: "#ec4899"
    download_url: "https://example.org/florence"
  - id: ravenlok
    name: "Ravenlok"
    status: in-progress
    status_label: "В процесі"
    color: "#f97316"
    gradient: "#f97316 -> #7c2d12"

progress:
  - { date: "2024-06", project: ravenlok, percent: 40 }
  - { date: "2024-08", project: ravenlok, percent: 60 }
  - { date: "2024-07", project: florence, percent: 100 }

featured:
  project_id: ravenlok
  translated_lines: 600
  total_lines: 1000
"##;

fn source_kind(err: ShowcaseError) -> CatalogErrorKind {
    match err {
        ShowcaseError::Catalog { source, .. } => source,
        other => panic!("expected a catalog error, got {other:?}"),
    }
}

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = builtin().unwrap();
    assert!(catalog.projects.len() >= 5);
    let (project, stats) = catalog.featured().unwrap();
    assert_eq!(project.id, stats.project_id);
    assert_eq!(stats.percent(), 60);
    assert!(!catalog.progress_table().is_empty());
}

#[test]
fn test_yaml_file_derives_month_axis() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, CATALOG_YAML).unwrap();

    let catalog = load_catalog(&path).unwrap();
    let table = catalog.progress_table();
    let months: Vec<String> = table.months().iter().map(Month::to_string).collect();
    assert_eq!(months, vec!["2024-06", "2024-07", "2024-08"]);

    assert_eq!(
        table.series_for("ravenlok").unwrap(),
        &[Some(40), None, Some(60)]
    );
    assert_eq!(table.latest("florence"), Some(100));
    assert_eq!(catalog.project("ravenlok").unwrap().gradient_stops().len(), 2);
}

#[test]
fn test_json_file_round_trips_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let original = builtin().unwrap();
    fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

    let loaded = load_or_builtin(Some(&path)).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ShowcaseError::Io { .. }));
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");

    let duplicate = CATALOG_YAML.replace("id: ravenlok", "id: florence");
    fs::write(&path, duplicate).unwrap();
    assert_eq!(
        source_kind(load_catalog(&path).unwrap_err()),
        CatalogErrorKind::DuplicateId("florence".to_string())
    );

    let over = CATALOG_YAML.replace("percent: 60", "percent: 160");
    fs::write(&path, over).unwrap();
    assert!(matches!(
        source_kind(load_catalog(&path).unwrap_err()),
        CatalogErrorKind::PercentOutOfRange { percent: 160, .. }
    ));

    let overfull = CATALOG_YAML.replace("translated_lines: 600", "translated_lines: 1600");
    fs::write(&path, overfull).unwrap();
    assert!(matches!(
        source_kind(load_catalog(&path).unwrap_err()),
        CatalogErrorKind::InvalidFeatured(_)
    ));
}

#[test]
fn test_malformed_values_fail_to_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");

    fs::write(&path, CATALOG_YAML.replace("2024-06", "2024-6")).unwrap();
    assert!(load_catalog(&path).is_err());

    fs::write(&path, CATALOG_YAML.replace("#ec4899", "pink")).unwrap();
    assert!(load_catalog(&path).is_err());
}
