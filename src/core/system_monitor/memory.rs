use super::metrics::{round1, MemorySample, MemoryStatus, BYTES_PER_GB};
use super::provider::SystemMetricsProvider;

/// Convert a raw status into the logged sample (GB, one decimal)
pub fn to_sample(status: &MemoryStatus) -> MemorySample {
    let available = status.available_bytes.min(status.total_bytes);

    MemorySample {
        load_percent: status.load_percent.min(100),
        total_gb: round1(status.total_bytes as f64 / BYTES_PER_GB),
        available_gb: round1(available as f64 / BYTES_PER_GB),
    }
}

/// Query the host for physical memory, `None` when the query fails
pub fn sample_memory<P>(provider: &mut P) -> Option<MemorySample>
where
    P: SystemMetricsProvider + ?Sized,
{
    match provider.memory_status() {
        Ok(status) => Some(to_sample(&status)),
        Err(e) => {
            log::warn!("Memory status unavailable: {}", e);
            None
        }
    }
}
