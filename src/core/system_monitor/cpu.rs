use std::time::Duration;

use super::metrics::{round1, CpuSample, CpuTimes};
use super::provider::SystemMetricsProvider;
use super::shutdown::ShutdownSignal;

/// Time between the two counter snapshots
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Busy share of CPU time between two counter snapshots, one decimal.
///
/// Returns 0.0 when no time elapsed or the kernel/user counters went
/// backwards (wrap or reset between readings). The idle counter may dip
/// slightly on Linux since it includes iowait; its delta is clamped to
/// `0..=total`.
pub fn busy_percent(before: &CpuTimes, after: &CpuTimes) -> f64 {
    let (kernel, user) = match (
        after.kernel.checked_sub(before.kernel),
        after.user.checked_sub(before.user),
    ) {
        (Some(kernel), Some(user)) => (kernel, user),
        _ => return 0.0,
    };

    let total = kernel.saturating_add(user);
    if total == 0 {
        return 0.0;
    }

    let idle = after.idle.saturating_sub(before.idle).min(total);
    let busy = total - idle;
    round1(busy as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Measures CPU utilization over a fixed window
#[derive(Debug, Clone)]
pub struct CpuSampler {
    window: Duration,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::with_window(CPU_SAMPLE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self { window }
    }

    /// Take two counter snapshots `window` apart.
    ///
    /// Returns `None` only when shutdown was requested during the wait.
    /// Counter read failures degrade to 0%.
    pub fn sample<P>(&self, provider: &mut P, shutdown: &ShutdownSignal) -> Option<CpuSample>
    where
        P: SystemMetricsProvider + ?Sized,
    {
        let before = provider.cpu_times();

        if !shutdown.wait(self.window) {
            return None;
        }

        let after = provider.cpu_times();

        let usage_percent = match (before, after) {
            (Ok(before), Ok(after)) => busy_percent(&before, &after),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("CPU counters unavailable, reporting 0%: {}", e);
                0.0
            }
        };

        Some(CpuSample { usage_percent })
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self::new()
    }
}
