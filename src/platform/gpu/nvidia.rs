#[cfg(feature = "nvml")]
use nvml_wrapper::{enum_wrappers::device::TemperatureSensor, Nvml};

use crate::core::system_monitor::{GpuProvider, GpuSample, GpuVendor};
use crate::error::{MonitorError, Result};
#[cfg(feature = "nvml")]
use crate::core::system_monitor::{round1, BYTES_PER_MB};

/// NVIDIA GPU provider using NVML
///
/// NVML is initialised and shut down around every query, so a driver
/// that goes away mid-run only costs the cycles it is missing for.
pub struct NvidiaGpuProvider {
    device_index: u32,
}

impl NvidiaGpuProvider {
    /// Create a new NVIDIA GPU provider
    ///
    /// Checks once that NVML loads and exposes at least one device.
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to init NVML: {}", e)))?;

            let count = nvml.device_count().map_err(|e| {
                MonitorError::gpu_not_available(format!("Failed to count GPUs: {}", e))
            })?;

            if index >= count {
                return Err(MonitorError::gpu_not_available(format!(
                    "GPU {} not found ({} devices)",
                    index, count
                )));
            }

            Ok(Self {
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}

#[cfg(feature = "nvml")]
fn read_device(nvml: &Nvml, index: u32) -> Result<GpuSample> {
    let count = nvml
        .device_count()
        .map_err(|e| MonitorError::metric_collection(format!("Failed to count GPUs: {}", e)))?;

    if count == 0 {
        return Err(MonitorError::gpu_not_available("NVML reports no devices"));
    }

    let device = nvml.device_by_index(index).map_err(|e| {
        MonitorError::metric_collection(format!("Failed to get GPU {}: {}", index, e))
    })?;

    let temperature = device.temperature(TemperatureSensor::Gpu).map_err(|e| {
        MonitorError::metric_collection(format!("Failed to get temperature: {}", e))
    })?;

    let utilization = device.utilization_rates().map_err(|e| {
        MonitorError::metric_collection(format!("Failed to get utilization: {}", e))
    })?;

    let memory_info = device.memory_info().map_err(|e| {
        MonitorError::metric_collection(format!("Failed to get memory info: {}", e))
    })?;

    Ok(GpuSample {
        utilization_percent: utilization.gpu as f64,
        temperature_celsius: temperature,
        memory_used_mb: round1(memory_info.used as f64 / BYTES_PER_MB),
        memory_total_mb: round1(memory_info.total as f64 / BYTES_PER_MB),
    })
}

impl GpuProvider for NvidiaGpuProvider {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn query(&mut self) -> Result<GpuSample> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init()
                .map_err(|e| MonitorError::gpu_not_available(format!("Failed to init NVML: {}", e)))?;

            let sample = read_device(&nvml, self.device_index);

            if let Err(e) = nvml.shutdown() {
                log::debug!("NVML shutdown failed: {}", e);
            }

            sample
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MonitorError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}
