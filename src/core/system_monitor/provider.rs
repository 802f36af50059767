use super::metrics::{CpuTimes, GpuSample, GpuVendor, MemoryStatus};
use crate::error::Result;

/// Host capability for the CPU and memory queries.
///
/// One implementation exists per supported platform (see `crate::platform::host`).
/// Samplers only ever talk to this trait, so tests swap in scripted providers.
pub trait SystemMetricsProvider {
    /// Read the cumulative idle/kernel/user counters
    fn cpu_times(&mut self) -> Result<CpuTimes>;

    /// Read current physical memory status
    fn memory_status(&mut self) -> Result<MemoryStatus>;
}

impl<P: SystemMetricsProvider + ?Sized> SystemMetricsProvider for Box<P> {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        (**self).cpu_times()
    }

    fn memory_status(&mut self) -> Result<MemoryStatus> {
        (**self).memory_status()
    }
}

/// Trait for GPU metrics providers
///
/// This trait abstracts GPU monitoring across vendors (NVIDIA, AMD).
/// Implementations are provided in the platform layer.
pub trait GpuProvider: Send {
    /// Get the vendor of the GPU
    fn vendor(&self) -> GpuVendor;

    /// Open a management session, read device 0 and close the session again
    fn query(&mut self) -> Result<GpuSample>;
}
