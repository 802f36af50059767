// Integration tests for the append-only metrics log

use std::fs;
use sysmon::core::metrics_log::MetricsLog;
use tempfile::TempDir;

fn line_count(path: &std::path::Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn test_each_append_adds_exactly_one_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let mut log = MetricsLog::with_echo(&path, Vec::new());

    for i in 1..=5 {
        log.append(&format!("cycle {}", i)).unwrap();
        assert_eq!(line_count(&path), i);
    }
}

#[test]
fn test_append_preserves_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    fs::write(&path, "from a previous run\n").unwrap();

    let mut log = MetricsLog::with_echo(&path, Vec::new());
    log.append("new line").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "from a previous run\nnew line\n"
    );
}

#[test]
fn test_echo_matches_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let mut log = MetricsLog::with_echo(&path, Vec::new());

    log.append("2024-01-01 00:00:00 - CPU: 1.0% | Memory: N/A | GPU: N/A")
        .unwrap();

    let echoed = String::from_utf8(log.echo().clone()).unwrap();
    assert_eq!(echoed, fs::read_to_string(&path).unwrap());
}

#[test]
fn test_non_ascii_is_written_as_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let mut log = MetricsLog::with_echo(&path, Vec::new());

    log.append("Temp: 65°C").unwrap();

    assert_eq!(fs::read(&path).unwrap(), "Temp: 65°C\n".as_bytes());
}

#[test]
fn test_write_failure_does_not_escape() {
    let temp_dir = TempDir::new().unwrap();
    // The path names a directory, so opening it for append fails
    let mut log = MetricsLog::with_echo(temp_dir.path(), Vec::new());

    let first = log.append("one");
    let second = log.append("two");

    assert!(first.is_err());
    assert!(second.is_err());

    let echoed = String::from_utf8(log.echo().clone()).unwrap();
    assert!(echoed.contains("one\n"));
    assert!(echoed.contains("two\n"));
    assert_eq!(echoed.matches("Logging error:").count(), 2);
}

#[test]
fn test_missing_parent_directory_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("system_monitor.log");
    let mut log = MetricsLog::with_echo(&path, Vec::new());

    assert!(log.append("line").is_err());
    assert!(!path.exists());
}
