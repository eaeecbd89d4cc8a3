use super::*;
use crate::brush::{BrushShape, BrushState};
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.brush, None);
    assert_eq!(config.settings_path, None);
    assert_eq!(config.brush_state_path, None);
}

#[test]
fn test_brush_config_defaults_via_getter() {
    let brush = Config::default().get_brush();
    assert_eq!(brush.default_texture, DEFAULT_BRUSH_TEXTURE);
    assert_eq!(brush.history_capacity, DEFAULT_BRUSH_HISTORY_CAPACITY);
    assert_eq!(brush.default_size, DEFAULT_BRUSH_SIZE);
    assert_eq!(brush.default_shape, BrushShape::Point);
}

#[test]
fn test_partial_brush_config_fills_defaults() {
    let json = r#"{"brush": {"defaultTexture": "L1#4"}}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    let brush = config.get_brush();
    assert_eq!(brush.default_texture, "L1#4");
    assert_eq!(brush.history_capacity, 5);
    assert_eq!(brush.default_size, 1);
}

#[test]
fn test_brush_shape_deserializes_lowercase() {
    let json = r#"{"brush": {"defaultShape": "circle", "defaultSize": 12}}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    let brush = config.get_brush();
    assert_eq!(brush.default_shape, BrushShape::Circle);
    assert_eq!(brush.default_size, 12);
}

#[test]
fn test_config_serialization_skips_unset_fields() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(json, "{}");

    let config = Config {
        brush: None,
        settings_path: Some("/tmp/settings.json".to_string()),
        brush_state_path: None,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"settingsPath\""));
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_paths_expand_tilde() {
    let config = Config::default();
    let settings = config.get_settings_path();
    let brush = config.get_brush_state_path();
    assert!(!settings.to_string_lossy().starts_with('~'));
    assert!(settings.ends_with(".settings-kit/settings.json"));
    assert!(brush.ends_with(".settings-kit/brush.json"));
    assert!(DEFAULT_SETTINGS_PATH.starts_with('~'));
    assert!(DEFAULT_BRUSH_STATE_PATH.starts_with('~'));
}

#[test]
fn test_explicit_paths_are_used() {
    let config = Config {
        brush: None,
        settings_path: Some("/data/s.json".to_string()),
        brush_state_path: Some("/data/b.json".to_string()),
    };
    assert_eq!(config.get_settings_path().to_str(), Some("/data/s.json"));
    assert_eq!(config.get_brush_state_path().to_str(), Some("/data/b.json"));
}

#[test]
fn test_load_config_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"brush": {"historyCapacity": 8}, "brushStatePath": "/x/brush.json"}"#,
    )
    .unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.get_brush().history_capacity, 8);
    assert_eq!(config.brush_state_path.as_deref(), Some("/x/brush.json"));
}

#[test]
fn test_load_config_from_invalid_json_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ brush: ").unwrap();
    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_load_config_with_unknown_shape_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"brush": {"defaultShape": "triangle"}}"#).unwrap();
    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_oversized_history_capacity_is_bounded() {
    let json = r#"{"brush": {"historyCapacity": 18446744073709551615}}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    let state = BrushState::from_config(&config.get_brush());
    assert_eq!(state.history.capacity(), MAX_BRUSH_HISTORY_CAPACITY);
    assert_eq!(state.history.len(), 1);
}
