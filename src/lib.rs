//! Map Bench
//!
//! A single-shot micro-benchmark that times two ways of transforming a large
//! in-memory sequence: the native `Iterator::map` and the utility-library map
//! provided by `rayon`. Each run measures both strategies once and prints the
//! elapsed wall-clock time of each.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod output;
pub mod models;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use executor::BenchmarkExecutor;
pub use models::{BenchReport, Config, Measurement, UserRecord};
pub use output::{OutputCoordinator, OutputFormatter, OutputFormatterFactory};
pub use types::{MapStrategy, OutputFormat, Payload};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information stamped by build.rs
pub mod build_info {
    pub const BUILD_TIME: &str = env!("BUILD_TIME");
    pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");
    pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");
    pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
}

/// Default configuration values
pub mod defaults {
    use crate::types::{OutputFormat, Payload};

    /// Number of elements transformed per measurement.
    pub const DEFAULT_LENGTH: usize = 1_000_000;
    /// Worker threads for the library map; 1 keeps both strategies single-threaded.
    pub const DEFAULT_THREADS: usize = 1;
    pub const DEFAULT_PAYLOAD: Payload = Payload::Records;
    pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Text;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Upper bound accepted for `threads`.
    pub const MAX_THREADS: usize = 1024;
    /// Default estimated peak memory above which a warning is emitted.
    pub const MEMORY_WARNING_BYTES: u64 = 4 * 1024 * 1024 * 1024;
}
