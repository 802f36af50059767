use std::io;
use thiserror::Error;

/// Custom error type for the metrics logger
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),
}

/// Result type alias for the metrics logger
pub type Result<T> = std::result::Result<T, MonitorError>;

impl MonitorError {
    /// Create an unsupported platform error
    pub fn unsupported_platform<S: Into<String>>(msg: S) -> Self {
        MonitorError::UnsupportedPlatform(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        MonitorError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        MonitorError::MetricCollection(msg.into())
    }
}
