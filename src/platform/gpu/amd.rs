use std::fmt::Debug;

use crate::core::system_monitor::{round1, GpuProvider, GpuSample, GpuVendor, BYTES_PER_MB};
use crate::error::{MonitorError, Result};

#[cfg(all(unix, feature = "rocm"))]
use rocm_smi_lib::{RocmSmi, TemperatureMetric};

/// AMD GPU provider using ROCm SMI
pub struct AmdGpuProvider {
    #[allow(dead_code)]
    device_index: u32,
}

/// Fail unless `index` names one of `count` devices
#[cfg_attr(not(all(unix, feature = "rocm")), allow(dead_code))]
fn check_device_index(index: u32, count: u32) -> Result<()> {
    if count == 0 {
        return Err(MonitorError::gpu_not_available("ROCm SMI reports no devices"));
    }

    if index >= count {
        return Err(MonitorError::gpu_not_available(format!(
            "GPU {} not found (only {} devices available)",
            index, count
        )));
    }

    Ok(())
}

/// Combine the individual ROCm SMI readings; any failed reading fails the sample
#[cfg_attr(not(all(unix, feature = "rocm")), allow(dead_code))]
fn sample_from_readings<E: Debug>(
    utilization: std::result::Result<f64, E>,
    temperature: std::result::Result<f64, E>,
    memory_used: std::result::Result<u64, E>,
    memory_total: std::result::Result<u64, E>,
) -> Result<GpuSample> {
    let utilization = utilization
        .map_err(|e| MonitorError::metric_collection(format!("Failed to get utilization: {:?}", e)))?;
    let temperature = temperature
        .map_err(|e| MonitorError::metric_collection(format!("Failed to get temperature: {:?}", e)))?;
    let memory_used = memory_used
        .map_err(|e| MonitorError::metric_collection(format!("Failed to get memory used: {:?}", e)))?;
    let memory_total = memory_total
        .map_err(|e| MonitorError::metric_collection(format!("Failed to get memory total: {:?}", e)))?;

    Ok(GpuSample {
        utilization_percent: utilization,
        temperature_celsius: temperature.max(0.0) as u32,
        memory_used_mb: round1(memory_used as f64 / BYTES_PER_MB),
        memory_total_mb: round1(memory_total as f64 / BYTES_PER_MB),
    })
}

impl AmdGpuProvider {
    /// Create a new AMD GPU provider
    ///
    /// Checks once that ROCm SMI initialises and the first GPU exists.
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let rocm = RocmSmi::init()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to init ROCm SMI: {:?}", e)))?;

            let device_count = rocm.get_device_count()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to get device count: {:?}", e)))?;

            check_device_index(index, device_count as u32)?;

            Ok(Self {
                device_index: index,
            })
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            let _ = index;
            Err(MonitorError::gpu_not_available(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }
}

impl GpuProvider for AmdGpuProvider {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Amd
    }

    fn query(&mut self) -> Result<GpuSample> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let rocm = RocmSmi::init()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to init ROCm SMI: {:?}", e)))?;

            let device_count = rocm.get_device_count()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to get device count: {:?}", e)))?;

            check_device_index(self.device_index, device_count as u32)?;

            let device = rocm
                .get_device_handle(self.device_index)
                .map_err(|e| MonitorError::metric_collection(format!("Failed to get GPU device: {:?}", e)))?;

            sample_from_readings(
                rocm.get_busy_percent(&device).map(|b| b as f64),
                rocm.get_temperature(&device, TemperatureMetric::Edge).map(|t| t as f64),
                rocm.get_memory_used(&device).map(|m| m as u64),
                rocm.get_memory_total(&device).map(|m| m as u64),
            )
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            Err(MonitorError::gpu_not_available(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }
}
