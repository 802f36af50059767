// Command handlers module
pub mod monitor;
pub mod version;

// Re-exports for cleaner imports
pub use monitor::execute as monitor;
pub use version::execute as version;
