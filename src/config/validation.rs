//! Advisory checks that run after the configuration is known to be valid

use crate::{
    models::Config,
    error::Result,
    types::Payload,
};
use colored::Colorize;

/// Configuration validator that produces warnings rather than errors
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and collect advisory warnings
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        config.validate()?;

        warnings.extend(Self::validate_length(config));
        warnings.extend(Self::validate_memory(config));
        warnings.extend(Self::validate_threads(config, num_cpus::get()));

        Ok(warnings)
    }

    fn validate_length(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.length == 0 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "Length is 0; both measurements will transform an empty sequence".to_string()
            ));
        } else if config.length < 10_000 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Length {} is small; timings will be dominated by noise", config.length)
            ));
        }

        warnings
    }

    /// The process may be killed when memory runs out; this is only an advisory.
    fn validate_memory(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let estimate = config.estimated_peak_bytes();

        if estimate > config.memory_warning_bytes {
            let hint = match config.payload {
                Payload::Records => " (try --payload numbers or a smaller --length)",
                Payload::Numbers => " (try a smaller --length)",
            };
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Estimated peak memory is {} for {} {}; the process may be terminated{}",
                    format_bytes(estimate),
                    config.length,
                    config.payload,
                    hint
                )
            ));
        }

        warnings
    }

    fn validate_threads(config: &Config, logical_cpus: usize) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.threads > logical_cpus {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "{} threads requested but only {} logical CPUs are available",
                    config.threads, logical_cpus
                )
            ));
        } else if config.threads != 1 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!(
                    "Library map runs on {} threads while the native map runs on one",
                    config.resolved_threads()
                )
            ));
        }

        warnings
    }
}

/// Render a byte count with a binary unit
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        if use_color {
            let level = match self.level {
                ValidationLevel::Info => self.level.as_str().blue(),
                ValidationLevel::Warning => self.level.as_str().yellow().bold(),
            };
            format!("[{}] {}", level, self.message)
        } else {
            format!("[{}] {}", self.level.as_str(), self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
