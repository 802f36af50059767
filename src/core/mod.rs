pub mod config;
pub mod metrics_log;
pub mod system_monitor;
