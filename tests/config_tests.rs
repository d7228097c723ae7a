//! Integration tests for configuration files, presets and validation.

use solovina::config::{
    AppConfig, ConfigFileError, ConfigPreset, Validatable, discover_config_file,
    generate_example_config, generate_json_schema, load_config_file, load_or_default,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_example_config_matches_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".solovina.yaml");
    fs::write(&path, generate_example_config()).unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(config.is_valid());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("solovina.yml");
    fs::write(&path, "carousel:\n  dwell_secs: 8\ntui:\n  theme: light\n").unwrap();

    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(config.carousel.dwell_secs, 8.0);
    assert!(config.carousel.autoplay);
    assert_eq!(config.tui.theme, "light");
    assert!(config.tui.mouse_enabled);
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".solovina.yaml");
    fs::write(&path, "carousel: [not, a, map]\n").unwrap();

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigFileError::Parse(_))
    ));
    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(config, AppConfig::default());
    assert!(loaded_from.is_none());
}

#[test]
fn test_explicit_path_wins_discovery() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "tui:\n  animations: false\n").unwrap();
    assert_eq!(discover_config_file(Some(&path)), Some(path));
}

#[test]
fn test_validation_reports_every_bad_field() {
    let mut config = AppConfig::default();
    config.carousel.dwell_secs = 0.0;
    config.tui.theme = "sepia".to_string();
    config.tui.tick_rate_ms = 0;
    config.data.catalog = Some("/definitely/not/here.yaml".into());

    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "carousel.dwell_secs",
            "tui.theme",
            "tui.tick_rate_ms",
            "data.catalog"
        ]
    );
}

#[test]
fn test_presets_layer_over_file_config() {
    let mut config = AppConfig::builder().theme("light").build();
    config.merge(&AppConfig::from_preset(ConfigPreset::Kiosk));
    assert_eq!(config.carousel.dwell_secs, 8.0);
    assert!(!config.tui.mouse_enabled);
    assert!(!config.tui.animations);
    assert_eq!(config.tui.theme, "light");

    let mut manual = AppConfig::default();
    manual.merge(&AppConfig::from_preset(ConfigPreset::from_name("manual").unwrap()));
    assert!(!manual.carousel.autoplay);
    assert!(ConfigPreset::from_name("nope").is_none());
}

#[test]
fn test_schema_describes_sections() {
    let schema: serde_json::Value = serde_json::from_str(&generate_json_schema().unwrap()).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    for section in ["carousel", "tui", "data"] {
        assert!(properties.contains_key(section), "missing {section}");
    }
}
