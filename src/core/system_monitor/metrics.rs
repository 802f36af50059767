/// One CPU utilization reading, 0..=100 with one decimal
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuSample {
    pub usage_percent: f64,
}

/// Physical memory reading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySample {
    /// Share of physical memory in use, 0..=100
    pub load_percent: u32,
    pub total_gb: f64,
    pub available_gb: f64,
}

/// Reading from the first GPU exposed by a vendor management library
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpuSample {
    pub utilization_percent: f64,
    pub temperature_celsius: u32,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GpuVendor {
    Nvidia,
    Amd,
    #[default]
    Unknown,
}

/// Cumulative CPU time counters as reported by the host.
///
/// `kernel` includes `idle`, matching `GetSystemTimes`. Providers on other
/// hosts fold their counters into the same convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub kernel: u64,
    pub user: u64,
}

/// Raw physical memory status in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    pub load_percent: u32,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
