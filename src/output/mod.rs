//! Output formatting and display system
//!
//! Text output is the two result lines, optionally wrapped with a header and
//! a comparison in verbose mode. JSON output is one report document.

mod formatter;
mod colored;
mod json;

pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};
pub use colored::{ColorScheme, ColoredFormatter};
pub use json::JsonFormatter;

use crate::{
    config::ValidationWarning,
    error::Result,
    models::{BenchReport, Config},
    types::OutputFormat,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter for the configured format, color and verbosity
    pub fn create_formatter(config: &Config) -> Box<dyn OutputFormatter> {
        match config.output_format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Self::create_text_formatter(config.enable_color, config.verbose),
        }
    }

    /// Create a text formatter based on color support and preferences
    pub fn create_text_formatter(enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

/// Main output coordinator that handles all result display
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    /// Create a coordinator with the formatter the configuration asks for
    pub fn from_config(config: &Config) -> Self {
        Self::new(OutputFormatterFactory::create_formatter(config))
    }

    /// Render the complete report
    pub fn display_report(&self, report: &BenchReport) -> Result<String> {
        self.formatter.format_report(report)
    }

    /// Render a configuration advisory
    pub fn display_warning(&self, warning: &ValidationWarning) -> Result<String> {
        self.formatter.format_warning(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationLevel;
    use crate::models::Measurement;
    use crate::types::MapStrategy;
    use chrono::Utc;
    use std::time::Duration;

    fn report() -> BenchReport {
        BenchReport::new(
            &Config::default(),
            1,
            Utc::now(),
            vec![
                Measurement::new(MapStrategy::Native, Duration::from_micros(250), 1),
                Measurement::new(MapStrategy::Library, Duration::from_micros(125), 1),
            ],
        )
    }

    #[test]
    fn test_text_coordinator_without_color() {
        let config = Config {
            enable_color: false,
            ..Config::default()
        };
        let output = OutputCoordinator::from_config(&config).display_report(&report()).unwrap();
        assert_eq!(output, "ES6 Map 시간: 0.25 밀리초\nLodash Map 시간: 0.125 밀리초");
    }

    #[test]
    fn test_json_coordinator() {
        let config = Config {
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        let output = OutputCoordinator::from_config(&config).display_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["measurements"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_warning_follows_output_format() {
        let warning = ValidationWarning::new(ValidationLevel::Warning, "x".to_string());

        let text = OutputCoordinator::new(OutputFormatterFactory::create_text_formatter(false, false));
        assert_eq!(text.display_warning(&warning).unwrap(), "[WARNING] x");

        let config = Config {
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        let json = OutputCoordinator::from_config(&config).display_warning(&warning).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["warning"], "x");
    }
}
