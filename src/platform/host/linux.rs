use std::fs;
use std::path::{Path, PathBuf};

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::proc_stat::parse_proc_stat;
use crate::core::system_monitor::{CpuTimes, MemoryStatus, SystemMetricsProvider};
use crate::error::{MonitorError, Result};

const PROC_STAT: &str = "/proc/stat";

/// Linux host: CPU counters from procfs, memory from sysinfo
pub struct LinuxProvider {
    stat_path: PathBuf,
    system: System,
}

impl LinuxProvider {
    /// Fails when the CPU counters cannot be read at all
    pub fn new() -> Result<Self> {
        Self::with_stat_path(PROC_STAT)
    }

    pub fn with_stat_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut provider = Self {
            stat_path: path.as_ref().to_path_buf(),
            system: System::new_with_specifics(
                RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
            ),
        };

        // Probe once so an unusable host is caught at startup
        provider.cpu_times().map_err(|e| {
            MonitorError::unsupported_platform(format!(
                "CPU counters unreadable at {}: {}",
                provider.stat_path.display(),
                e
            ))
        })?;

        Ok(provider)
    }
}

impl SystemMetricsProvider for LinuxProvider {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        let contents = fs::read_to_string(&self.stat_path)?;
        parse_proc_stat(&contents)
    }

    fn memory_status(&mut self) -> Result<MemoryStatus> {
        self.system
            .refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

        let total = self.system.total_memory();
        if total == 0 {
            return Err(MonitorError::metric_collection(
                "sysinfo reported zero physical memory",
            ));
        }

        let available = self.system.available_memory().min(total);
        let used = total - available;

        Ok(MemoryStatus {
            load_percent: ((used as f64 / total as f64) * 100.0).round() as u32,
            total_bytes: total,
            available_bytes: available,
        })
    }
}
