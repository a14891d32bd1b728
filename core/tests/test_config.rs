use blepower_core::{load_config, save_config, ConfigError, LogConfig};
use std::fs;

#[test]
fn save_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blepower.json");

    let cfg = LogConfig {
        notify_marker: "notified".into(),
        characteristic: "2A63".into(),
        windows: vec![5, 30],
    };
    save_config(&cfg, &path).expect("save_config failed");

    let loaded = load_config(&path).expect("load_config failed");
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_gives_default() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config(dir.path().join("nope.json")).unwrap();
    assert_eq!(loaded, LogConfig::default());
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "windows": [3] }"#).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.windows, vec![3]);
    assert_eq!(loaded.characteristic, "1234");
}

#[test]
fn parse_error_names_json_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "windows": [3, "ten"] }"#).unwrap();

    match load_config(&path) {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "windows[1]"),
        other => panic!("forventet Parse-feil, fikk {:?}", other),
    }
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.json");
    fs::write(&path, r#"{ "characteristic": "xyz" }"#).unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));
}
