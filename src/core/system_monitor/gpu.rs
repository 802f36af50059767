use super::metrics::GpuSample;
use super::provider::GpuProvider;

/// Best-effort GPU reading.
///
/// Holds the vendor provider found at startup, if any. Each call to
/// [`GpuSampler::sample`] runs a full session against it; every failure
/// turns into `None` and the caller renders `GPU: N/A`.
pub struct GpuSampler {
    provider: Option<Box<dyn GpuProvider>>,
}

impl GpuSampler {
    pub fn new(provider: Option<Box<dyn GpuProvider>>) -> Self {
        Self { provider }
    }

    /// Sampler that always reports the GPU as unavailable
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn sample(&mut self) -> Option<GpuSample> {
        let provider = self.provider.as_mut()?;

        match provider.query() {
            Ok(mut sample) => {
                sample.memory_used_mb = sample.memory_used_mb.min(sample.memory_total_mb);
                Some(sample)
            }
            Err(e) => {
                log::debug!("{:?} GPU query failed: {}", provider.vendor(), e);
                None
            }
        }
    }
}
