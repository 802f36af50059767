//! Host providers for the CPU counter and memory queries.

#[cfg(any(target_os = "linux", test))]
mod proc_stat;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(windows)]
mod windows;

#[cfg(any(target_os = "linux", test))]
pub use proc_stat::parse_proc_stat;

#[cfg(target_os = "linux")]
pub use linux::LinuxProvider;
#[cfg(windows)]
pub use windows::WindowsProvider;

use crate::core::system_monitor::SystemMetricsProvider;
#[allow(unused_imports)]
use crate::error::{MonitorError, Result};

/// Provider for the current host.
///
/// Errors with `UnsupportedPlatform` when this host has no CPU counter source.
pub fn host_provider() -> Result<Box<dyn SystemMetricsProvider>> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(LinuxProvider::new()?))
    }
    #[cfg(windows)]
    {
        Ok(Box::new(WindowsProvider::new()?))
    }
    #[cfg(not(any(target_os = "linux", windows)))]
    {
        Err(MonitorError::unsupported_platform(format!(
            "no CPU counter source for {}",
            std::env::consts::OS
        )))
    }
}
