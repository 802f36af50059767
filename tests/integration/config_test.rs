use std::fs;
use std::path::PathBuf;
use sysmon::core::config::MonitorConfig;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = MonitorConfig::default();
    assert_eq!(config.log_path, PathBuf::from("system_monitor.log"));
    assert!(config.gpu_enabled);
}

#[test]
fn test_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = MonitorConfig::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, MonitorConfig::default());
}

#[test]
fn test_load_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "  \n").unwrap();

    assert_eq!(MonitorConfig::load_from(&path).unwrap(), MonitorConfig::default());
}

#[test]
fn test_load_invalid_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(MonitorConfig::load_from(&path).unwrap(), MonitorConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "gpu_enabled": false }"#).unwrap();

    let config = MonitorConfig::load_from(&path).unwrap();
    assert!(!config.gpu_enabled);
    assert_eq!(config.log_path, PathBuf::from("system_monitor.log"));
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = MonitorConfig::default();
    config.set_log_path(PathBuf::from("/var/log/metrics.log"));
    config.gpu_enabled = false;
    config.save_to(&path).unwrap();

    assert_eq!(MonitorConfig::load_from(&path).unwrap(), config);
}
