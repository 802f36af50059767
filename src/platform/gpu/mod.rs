//! GPU-specific platform code.
//!
//! Supports NVIDIA (via NVML) and AMD (via ROCm SMI).

mod amd;
mod nvidia;

pub use amd::AmdGpuProvider;
pub use nvidia::NvidiaGpuProvider;

use crate::core::system_monitor::GpuProvider;
use crate::error::{MonitorError, Result};

/// Attempt to get an available GPU provider
///
/// Tries each supported vendor in order of preference:
/// 1. NVIDIA (via NVML)
/// 2. AMD (via ROCm SMI)
///
/// Returns error if no GPU is available.
pub fn get_gpu_provider() -> Result<Box<dyn GpuProvider>> {
    match NvidiaGpuProvider::new() {
        Ok(provider) => return Ok(Box::new(provider)),
        Err(e) => log::debug!("{}", e),
    }

    match AmdGpuProvider::new() {
        Ok(provider) => return Ok(Box::new(provider)),
        Err(e) => log::debug!("{}", e),
    }

    Err(MonitorError::gpu_not_available("No supported GPU found"))
}
