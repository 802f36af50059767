use crate::core::system_monitor::CpuTimes;
use crate::error::{MonitorError, Result};

/// Parse the aggregate `cpu` line of `/proc/stat` into [`CpuTimes`].
///
/// Columns are user, nice, system, idle, iowait, irq, softirq, steal, in
/// USER_HZ ticks. Older kernels stop after idle; missing columns count as 0.
/// iowait counts as idle, and kernel time includes idle.
pub fn parse_proc_stat(contents: &str) -> Result<CpuTimes> {
    let line = contents
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cpu"))
        .ok_or_else(|| MonitorError::metric_collection("no aggregate cpu line in /proc/stat"))?;

    let fields = line
        .split_whitespace()
        .skip(1)
        .map(|field| {
            field.parse::<u64>().map_err(|e| {
                MonitorError::metric_collection(format!("bad /proc/stat field {:?}: {}", field, e))
            })
        })
        .collect::<Result<Vec<u64>>>()?;

    if fields.len() < 4 {
        return Err(MonitorError::metric_collection(format!(
            "expected at least 4 cpu columns in /proc/stat, found {}",
            fields.len()
        )));
    }

    let column = |i: usize| fields.get(i).copied().unwrap_or(0);
    let (user, nice, system, idle) = (column(0), column(1), column(2), column(3));
    let (iowait, irq, softirq, steal) = (column(4), column(5), column(6), column(7));

    let idle = idle + iowait;

    Ok(CpuTimes {
        idle,
        kernel: system + irq + softirq + steal + idle,
        user: user + nice,
    })
}
