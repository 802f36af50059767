//! Monitor command handler.
//!
//! Polls CPU, memory and GPU every few seconds and appends one line per
//! cycle to the log file until Ctrl+C.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::config::MonitorConfig;
use crate::core::metrics_log::MetricsLog;
use crate::core::system_monitor::{
    GpuSampler, Monitor, MonitorStats, ShutdownSignal, SystemMetricsProvider,
};
use crate::platform::{get_gpu_provider, host_provider};

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = MonitorConfig::load().context("Failed to load configuration")?;

    if let Some(path) = matches.get_one::<PathBuf>("log-file") {
        config.set_log_path(path.clone());
    }
    if matches.get_flag("no-gpu") {
        config.gpu_enabled = false;
    }
    let max_cycles = matches.get_one::<u64>("count").copied();

    let provider = host_provider().context("Cannot read system metrics on this host")?;

    let gpu = if config.gpu_enabled {
        match get_gpu_provider() {
            Ok(provider) => {
                log::info!("Using {:?} GPU", provider.vendor());
                GpuSampler::new(Some(provider))
            }
            Err(e) => {
                log::info!("{}", e);
                GpuSampler::disabled()
            }
        }
    } else {
        GpuSampler::disabled()
    };

    // Setup Ctrl+C handler
    let shutdown = ShutdownSignal::new();
    let handler_signal = shutdown.clone();
    ctrlc::set_handler(move || handler_signal.trigger())
        .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    let log = MetricsLog::new(&config.log_path);
    let monitor = Monitor::new(provider, gpu, log, shutdown);

    run_with(monitor, max_cycles, &mut io::stdout())?;
    Ok(())
}

/// Print the banner, run the loop, print the shutdown message.
///
/// `out` receives the banner and shutdown message; metric lines go to the
/// monitor's own echo sink.
pub fn run_with<P, W, O>(
    mut monitor: Monitor<P, W>,
    max_cycles: Option<u64>,
    out: &mut O,
) -> Result<MonitorStats>
where
    P: SystemMetricsProvider,
    W: Write,
    O: Write,
{
    let log_path = monitor.log().path().to_path_buf();

    writeln!(
        out,
        "{}",
        format!("System monitor started. Logging to {}", log_path.display())
            .cyan()
            .bold()
    )?;
    writeln!(out, "{}", "Press Ctrl+C to stop".dimmed())?;
    writeln!(out)?;
    out.flush()?;

    let stats = monitor.run(max_cycles);

    if stats.was_cancelled {
        writeln!(out)?;
    }
    writeln!(out, "{}", "Monitoring stopped".yellow().bold())?;
    out.flush()?;

    if stats.write_failures > 0 {
        log::warn!(
            "{} of {} lines could not be written to {}",
            stats.write_failures,
            stats.cycles,
            log_path.display()
        );
    }

    Ok(stats)
}
