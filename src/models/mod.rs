//! Data models and structures for the map benchmark

pub mod config;
pub mod metrics;
pub mod record;

// Re-export main model types
pub use config::Config;
pub use metrics::{BenchReport, Measurement};
pub use record::UserRecord;
