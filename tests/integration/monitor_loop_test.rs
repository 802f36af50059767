// Integration tests for the poll loop with scripted samplers

use chrono::NaiveDateTime;
use std::collections::VecDeque;
use std::fs;
use std::thread;
use std::time::{Duration, Instant};
use sysmon::core::metrics_log::MetricsLog;
use sysmon::core::system_monitor::{
    CpuTimes, GpuProvider, GpuSample, GpuSampler, GpuVendor, MemoryStatus, Monitor,
    ShutdownSignal, SystemMetricsProvider,
};
use sysmon::ui::TIMESTAMP_FORMAT;
use sysmon::{MonitorError, Result};
use tempfile::TempDir;

const GIB: u64 = 1024 * 1024 * 1024;

/// Replays CPU counters in order; memory is fixed at 42% of 16 GiB
struct ScriptedHost {
    cpu: VecDeque<CpuTimes>,
}

impl ScriptedHost {
    /// Counters producing 10%, 20%, 30% ... busy per cycle
    fn rising(cycles: u64) -> Self {
        let mut cpu = VecDeque::new();
        let mut now = CpuTimes::default();
        for cycle in 1..=cycles {
            cpu.push_back(now);
            now = CpuTimes {
                idle: now.idle + (100 - 10 * cycle),
                kernel: now.kernel + 100,
                user: now.user,
            };
            cpu.push_back(now);
        }
        Self { cpu }
    }
}

impl SystemMetricsProvider for ScriptedHost {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        self.cpu
            .pop_front()
            .ok_or_else(|| MonitorError::metric_collection("script exhausted"))
    }

    fn memory_status(&mut self) -> Result<MemoryStatus> {
        Ok(MemoryStatus {
            load_percent: 42,
            total_bytes: 16 * GIB,
            available_bytes: 8 * GIB,
        })
    }
}

struct FakeGpu;

impl GpuProvider for FakeGpu {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn query(&mut self) -> Result<GpuSample> {
        Ok(GpuSample {
            utilization_percent: 30.0,
            temperature_celsius: 65,
            memory_used_mb: 2048.0,
            memory_total_mb: 8192.0,
        })
    }
}

fn fast_monitor(
    host: ScriptedHost,
    gpu: GpuSampler,
    log: MetricsLog<Vec<u8>>,
    shutdown: ShutdownSignal,
) -> Monitor<ScriptedHost, Vec<u8>> {
    Monitor::new(host, gpu, log, shutdown).with_timing(Duration::ZERO, Duration::ZERO)
}

#[test]
fn test_three_cycles_write_three_lines_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let log = MetricsLog::with_echo(&path, Vec::new());

    let mut monitor = fast_monitor(
        ScriptedHost::rising(3),
        GpuSampler::disabled(),
        log,
        ShutdownSignal::new(),
    );
    let stats = monitor.run(Some(3));

    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.write_failures, 0);
    assert!(!stats.was_cancelled);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);

    for (line, expected_cpu) in lines.iter().zip(["10.0", "20.0", "30.0"]) {
        assert!(
            line.ends_with(&format!(
                " - CPU: {}% | Memory: 42% (8.0/16.0 GB) | GPU: N/A",
                expected_cpu
            )),
            "unexpected line: {}",
            line
        );
    }

    let timestamps: Vec<NaiveDateTime> = lines
        .iter()
        .map(|line| NaiveDateTime::parse_from_str(&line[..19], TIMESTAMP_FORMAT).unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));

    // Every line was also echoed
    let echoed = String::from_utf8(monitor.log().echo().clone()).unwrap();
    assert_eq!(echoed, contents);
}

#[test]
fn test_gpu_sample_is_appended_to_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let log = MetricsLog::with_echo(&path, Vec::new());

    let mut monitor = fast_monitor(
        ScriptedHost::rising(1),
        GpuSampler::new(Some(Box::new(FakeGpu))),
        log,
        ShutdownSignal::new(),
    );
    monitor.run(Some(1));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with(
        "Memory: 42% (8.0/16.0 GB) | GPU: 30.0% | Temp: 65°C | VRAM: 2048.0/8192.0 MB\n"
    ));
}

#[test]
fn test_write_failures_do_not_stop_the_loop() {
    let temp_dir = TempDir::new().unwrap();
    let log = MetricsLog::with_echo(temp_dir.path(), Vec::new());

    let mut monitor = fast_monitor(
        ScriptedHost::rising(2),
        GpuSampler::disabled(),
        log,
        ShutdownSignal::new(),
    );
    let stats = monitor.run(Some(2));

    assert_eq!(stats.cycles, 2);
    assert_eq!(stats.write_failures, 2);
}

#[test]
fn test_exhausted_counters_degrade_to_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let log = MetricsLog::with_echo(&path, Vec::new());

    let mut monitor = fast_monitor(
        ScriptedHost { cpu: VecDeque::new() },
        GpuSampler::disabled(),
        log,
        ShutdownSignal::new(),
    );
    monitor.run(Some(1));

    assert!(fs::read_to_string(&path).unwrap().contains("CPU: 0.0%"));
}

#[test]
fn test_shutdown_interrupts_interval_wait() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let log = MetricsLog::with_echo(&path, Vec::new());
    let shutdown = ShutdownSignal::new();

    let mut monitor = Monitor::new(
        ScriptedHost::rising(5),
        GpuSampler::disabled(),
        log,
        shutdown.clone(),
    )
    .with_timing(Duration::ZERO, Duration::from_secs(60));

    thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        shutdown.trigger();
    });

    let started = Instant::now();
    let stats = monitor.run(None);

    assert!(stats.was_cancelled);
    assert_eq!(stats.cycles, 1);
    assert!(started.elapsed() < Duration::from_secs(30));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn test_shutdown_interrupts_cpu_window() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("system_monitor.log");
    let log = MetricsLog::with_echo(&path, Vec::new());
    let shutdown = ShutdownSignal::new();

    let mut monitor = Monitor::new(
        ScriptedHost::rising(1),
        GpuSampler::disabled(),
        log,
        shutdown.clone(),
    )
    .with_timing(Duration::from_secs(60), Duration::ZERO);

    thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        shutdown.trigger();
    });

    let stats = monitor.run(None);

    assert!(stats.was_cancelled);
    assert_eq!(stats.cycles, 0);
    assert!(!path.exists());
}
