// Platform-specific code

pub mod gpu;
pub mod host;

pub use gpu::get_gpu_provider;
pub use host::host_provider;
