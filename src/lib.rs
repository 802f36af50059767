// sysmon library - public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::MonitorConfig;

/// Initialize logging.
///
/// Diagnostics go to stderr at `warn` unless `RUST_LOG` says otherwise;
/// `verbose` forces `debug`.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    // A second init (tests, embedding) is harmless
    let _ = builder.try_init();
}
