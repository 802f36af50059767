//! System monitoring core functionality.
//!
//! Samplers for CPU, memory and GPU, the host capability traits they depend
//! on, and the poll loop that turns their readings into log lines.

mod cpu;
mod gpu;
mod memory;
mod metrics;
mod poller;
mod provider;
mod shutdown;

pub use cpu::{busy_percent, CpuSampler, CPU_SAMPLE_WINDOW};
pub use gpu::GpuSampler;
pub use memory::{sample_memory, to_sample};
pub use metrics::{
    round1, CpuSample, CpuTimes, GpuSample, GpuVendor, MemorySample, MemoryStatus, BYTES_PER_GB,
    BYTES_PER_MB,
};
pub use poller::{Monitor, MonitorStats, POLL_INTERVAL};
pub use provider::{GpuProvider, SystemMetricsProvider};
pub use shutdown::ShutdownSignal;
