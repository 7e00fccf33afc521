//! JSON formatter for machine-readable output

use super::formatter::OutputFormatter;
use crate::{config::ValidationWarning, error::Result, models::BenchReport};
use serde_json::json;

/// Renders reports as pretty-printed JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &BenchReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_warning(&self, warning: &ValidationWarning) -> Result<String> {
        let value = json!({
            "level": warning.level.as_str(),
            "warning": warning.message,
        });
        Ok(serde_json::to_string(&value)?)
    }
}
