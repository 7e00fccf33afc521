//! Configuration data model and validation

use crate::types::{AppError, OutputFormat, Payload, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of elements generated and transformed per measurement
    #[serde(default = "default_length")]
    pub length: usize,

    /// What each index is mapped to
    #[serde(default = "default_payload")]
    pub payload: Payload,

    /// Worker threads for the library map (0 = all logical CPUs)
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// How results are printed
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Estimated peak memory above which a warning is printed
    #[serde(default = "default_memory_warning_bytes")]
    pub memory_warning_bytes: u64,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: default_length(),
            payload: default_payload(),
            threads: default_threads(),
            output_format: default_output_format(),
            enable_color: default_enable_color(),
            memory_warning_bytes: default_memory_warning_bytes(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.threads > crate::defaults::MAX_THREADS {
            return Err(AppError::config(format!(
                "Thread count cannot exceed {}, got {}",
                crate::defaults::MAX_THREADS,
                self.threads
            )));
        }

        Ok(())
    }

    /// Worker threads actually used by the library map
    pub fn resolved_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }

    /// Rough peak memory of one measurement: the index vector plus the output
    pub fn estimated_peak_bytes(&self) -> u64 {
        (self.length as u64).saturating_mul(self.payload.bytes_per_element() as u64)
    }

    /// Merge variables supplied by `lookup` into this configuration
    pub fn merge_from_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(length) = lookup("BENCH_LENGTH") {
            self.length = parse_length(&length)
                .map_err(|e| AppError::config(format!("Invalid BENCH_LENGTH value '{}': {}", length, e)))?;
        }

        if let Some(payload) = lookup("BENCH_PAYLOAD") {
            self.payload = payload.parse()
                .map_err(|e| AppError::config(format!("Invalid BENCH_PAYLOAD value '{}': {}", payload, e)))?;
        }

        if let Some(threads) = lookup("BENCH_THREADS") {
            self.threads = threads.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid BENCH_THREADS value '{}': {}", threads, e)))?;
        }

        if let Some(format) = lookup("BENCH_FORMAT") {
            self.output_format = format.parse()
                .map_err(|e| AppError::config(format!("Invalid BENCH_FORMAT value '{}': {}", format, e)))?;
        }

        if let Some(enable_color) = lookup("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        if let Some(bytes) = lookup("BENCH_MEMORY_WARNING") {
            self.memory_warning_bytes = parse_length(&bytes)
                .map(|b| b as u64)
                .map_err(|e| AppError::config(format!("Invalid BENCH_MEMORY_WARNING value '{}': {}", bytes, e)))?;
        }

        Ok(())
    }
}

/// Parse a length, accepting `_` digit separators such as `60_000_000`
pub fn parse_length(value: &str) -> std::result::Result<usize, String> {
    let cleaned: String = value.trim().chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || cleaned.starts_with('+') {
        return Err(format!("Invalid length: {}", value));
    }
    cleaned.parse::<usize>().map_err(|e| format!("Invalid length '{}': {}", value, e))
}

// Default value functions for serde
fn default_length() -> usize {
    crate::defaults::DEFAULT_LENGTH
}

fn default_payload() -> Payload {
    crate::defaults::DEFAULT_PAYLOAD
}

fn default_threads() -> usize {
    crate::defaults::DEFAULT_THREADS
}

fn default_output_format() -> OutputFormat {
    crate::defaults::DEFAULT_OUTPUT_FORMAT
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

fn default_memory_warning_bytes() -> u64 {
    crate::defaults::MEMORY_WARNING_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length, crate::defaults::DEFAULT_LENGTH);
        assert_eq!(config.payload, Payload::Records);
        assert_eq!(config.threads, 1);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_zero_length_is_valid() {
        let mut config = Config::default();
        config.length = 0;
        assert!(config.validate().is_ok());
        assert_eq!(config.estimated_peak_bytes(), 0);
    }

    #[test]
    fn test_largest_length_is_valid() {
        let mut config = Config::default();
        config.length = usize::MAX;
        assert!(config.validate().is_ok());
        assert!(config.estimated_peak_bytes() >= usize::MAX as u64);
    }

    #[test]
    fn test_too_many_threads_invalid() {
        let mut config = Config::default();
        config.threads = crate::defaults::MAX_THREADS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolved_threads() {
        let mut config = Config::default();
        config.threads = 3;
        assert_eq!(config.resolved_threads(), 3);

        config.threads = 0;
        assert_eq!(config.resolved_threads(), num_cpus::get());
    }

    #[test]
    fn test_estimated_peak_bytes() {
        let mut config = Config::default();
        config.length = 1000;
        config.payload = Payload::Numbers;
        assert_eq!(config.estimated_peak_bytes(), 16_000);
    }

    #[test]
    fn test_merge_from_lookup() {
        let mut config = Config::default();
        config.merge_from_lookup(lookup_from(&[
            ("BENCH_LENGTH", "30_000_000"),
            ("BENCH_PAYLOAD", "numbers"),
            ("BENCH_THREADS", "4"),
            ("BENCH_FORMAT", "json"),
            ("ENABLE_COLOR", "false"),
            ("BENCH_MEMORY_WARNING", "1_000"),
        ])).unwrap();

        assert_eq!(config.length, 30_000_000);
        assert_eq!(config.payload, Payload::Numbers);
        assert_eq!(config.threads, 4);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.enable_color);
        assert_eq!(config.memory_warning_bytes, 1_000);
    }

    #[test]
    fn test_merge_from_lookup_rejects_bad_values() {
        let mut config = Config::default();
        let err = config.merge_from_lookup(lookup_from(&[("BENCH_LENGTH", "lots")])).unwrap_err();
        assert!(err.to_string().contains("BENCH_LENGTH"));

        let err = config.merge_from_lookup(lookup_from(&[("ENABLE_COLOR", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("ENABLE_COLOR"));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("5").unwrap(), 5);
        assert_eq!(parse_length("60_000_000").unwrap(), 60_000_000);
        assert_eq!(parse_length(" 0 ").unwrap(), 0);
        assert!(parse_length("").is_err());
        assert!(parse_length("-1").is_err());
        assert!(parse_length("+5").is_err());
        assert!(parse_length("1e6").is_err());
    }
}
