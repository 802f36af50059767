//! The poll loop: sample, format, append, sleep, repeat.

use chrono::{Local, NaiveDateTime};
use std::io::{Stdout, Write};
use std::time::Duration;

use super::cpu::{CpuSampler, CPU_SAMPLE_WINDOW};
use super::gpu::GpuSampler;
use super::memory::sample_memory;
use super::provider::SystemMetricsProvider;
use super::shutdown::ShutdownSignal;
use crate::core::metrics_log::MetricsLog;
use crate::ui::format_metrics_line;

/// Pause between the end of one cycle and the start of the next
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorStats {
    /// Cycles that produced a line
    pub cycles: u64,
    /// Cycles whose line could not be written to the log file
    pub write_failures: u64,
    pub was_cancelled: bool,
}

/// Sequential metrics poller.
///
/// Runs on the calling thread. The CPU window and the poll interval are the
/// only waits and both stop early once the shutdown signal fires.
pub struct Monitor<P: SystemMetricsProvider, W: Write = Stdout> {
    provider: P,
    cpu: CpuSampler,
    gpu: GpuSampler,
    log: MetricsLog<W>,
    interval: Duration,
    shutdown: ShutdownSignal,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<P: SystemMetricsProvider, W: Write> Monitor<P, W> {
    pub fn new(provider: P, gpu: GpuSampler, log: MetricsLog<W>, shutdown: ShutdownSignal) -> Self {
        Self {
            provider,
            cpu: CpuSampler::with_window(CPU_SAMPLE_WINDOW),
            gpu,
            log,
            interval: POLL_INTERVAL,
            shutdown,
            clock: local_now,
        }
    }

    /// Override the CPU window and poll interval
    pub fn with_timing(mut self, cpu_window: Duration, interval: Duration) -> Self {
        self.cpu = CpuSampler::with_window(cpu_window);
        self.interval = interval;
        self
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn log(&self) -> &MetricsLog<W> {
        &self.log
    }

    /// Sample everything once and append the line.
    ///
    /// Returns the line, or `None` if shutdown interrupted the CPU window.
    /// The `bool` is whether the file write succeeded.
    pub fn run_cycle(&mut self) -> Option<(String, bool)> {
        let cpu = self.cpu.sample(&mut self.provider, &self.shutdown)?;
        let memory = sample_memory(&mut self.provider);
        let gpu = self.gpu.sample();

        let timestamp = (self.clock)();
        let line = format_metrics_line(&timestamp, &cpu, memory.as_ref(), gpu.as_ref());

        let written = self.log.append(&line).is_ok();
        Some((line, written))
    }

    /// Poll until shutdown, or until `max_cycles` lines were produced.
    pub fn run(&mut self, max_cycles: Option<u64>) -> MonitorStats {
        let mut stats = MonitorStats::default();

        log::info!(
            "Monitor loop started (log: {}, interval: {:?}, gpu: {})",
            self.log.path().display(),
            self.interval,
            self.gpu.is_enabled()
        );

        loop {
            if self.shutdown.is_triggered() {
                stats.was_cancelled = true;
                break;
            }

            let Some((_, written)) = self.run_cycle() else {
                stats.was_cancelled = true;
                break;
            };

            stats.cycles += 1;
            if !written {
                stats.write_failures += 1;
            }

            if max_cycles.is_some_and(|max| stats.cycles >= max) {
                break;
            }

            if !self.shutdown.wait(self.interval) {
                stats.was_cancelled = true;
                break;
            }
        }

        log::info!(
            "Monitor loop stopped after {} cycles ({} write failures)",
            stats.cycles,
            stats.write_failures
        );

        stats
    }
}
