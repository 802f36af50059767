use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::core::system_monitor::{CpuSample, GpuSample, MemorySample};

/// Timestamp layout used at the start of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format one sample cycle as a single log line.
///
/// `<timestamp> - CPU: 17.5% | Memory: 42% (8.0/16.0 GB) | GPU: N/A`
///
/// Absent memory or GPU samples render as `N/A`. No trailing newline.
pub fn format_metrics_line(
    timestamp: &NaiveDateTime,
    cpu: &CpuSample,
    memory: Option<&MemorySample>,
    gpu: Option<&GpuSample>,
) -> String {
    let mut line = format!(
        "{} - CPU: {:.1}% | ",
        timestamp.format(TIMESTAMP_FORMAT),
        cpu.usage_percent
    );

    // Writing into a String cannot fail
    let _ = match memory {
        Some(mem) => write!(
            line,
            "Memory: {}% ({:.1}/{:.1} GB) | ",
            mem.load_percent, mem.available_gb, mem.total_gb
        ),
        None => write!(line, "Memory: N/A | "),
    };

    let _ = match gpu {
        Some(gpu) => write!(
            line,
            "GPU: {:.1}% | Temp: {}°C | VRAM: {:.1}/{:.1} MB",
            gpu.utilization_percent,
            gpu.temperature_celsius,
            gpu.memory_used_mb,
            gpu.memory_total_mb
        ),
        None => write!(line, "GPU: N/A"),
    };

    line
}
