use std::mem;

use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};
use windows_sys::Win32::System::Threading::GetSystemTimes;

use crate::core::system_monitor::{CpuTimes, MemoryStatus, SystemMetricsProvider};
use crate::error::{MonitorError, Result};

/// Windows host: `GetSystemTimes` and `GlobalMemoryStatusEx`
pub struct WindowsProvider;

impl WindowsProvider {
    pub fn new() -> Result<Self> {
        let mut provider = Self;
        provider.cpu_times().map_err(|e| {
            MonitorError::unsupported_platform(format!("GetSystemTimes unavailable: {}", e))
        })?;
        Ok(provider)
    }
}

fn filetime_to_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

impl SystemMetricsProvider for WindowsProvider {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        let zero = FILETIME {
            dwLowDateTime: 0,
            dwHighDateTime: 0,
        };
        let (mut idle, mut kernel, mut user) = (zero, zero, zero);

        // SAFETY: all three pointers refer to live, writable FILETIME values
        let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };
        if ok == 0 {
            return Err(MonitorError::Io(std::io::Error::last_os_error()));
        }

        Ok(CpuTimes {
            idle: filetime_to_u64(&idle),
            kernel: filetime_to_u64(&kernel),
            user: filetime_to_u64(&user),
        })
    }

    fn memory_status(&mut self) -> Result<MemoryStatus> {
        let mut status: MEMORYSTATUSEX = unsafe { mem::zeroed() };
        status.dwLength = mem::size_of::<MEMORYSTATUSEX>() as u32;

        // SAFETY: dwLength is set and the struct outlives the call
        let ok = unsafe { GlobalMemoryStatusEx(&mut status) };
        if ok == 0 {
            return Err(MonitorError::metric_collection(format!(
                "GlobalMemoryStatusEx failed: {}",
                std::io::Error::last_os_error()
            )));
        }

        Ok(MemoryStatus {
            load_percent: status.dwMemoryLoad,
            total_bytes: status.ullTotalPhys,
            available_bytes: status.ullAvailPhys,
        })
    }
}
