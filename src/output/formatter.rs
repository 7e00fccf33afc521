//! Output formatter trait and plain text implementation

use crate::{
    config::ValidationWarning,
    error::{AppError, Result},
    models::{BenchReport, Measurement},
};
use std::fmt::Write as _;

/// Trait for rendering benchmark results
pub trait OutputFormatter: Send + Sync {
    /// Format a complete report
    fn format_report(&self, report: &BenchReport) -> Result<String>;

    /// Format a configuration advisory
    fn format_warning(&self, warning: &ValidationWarning) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Add a header, run details and a comparison around the result lines
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Run details shown under the verbose header
    pub(crate) fn run_details(report: &BenchReport) -> Vec<(&'static str, String)> {
        vec![
            ("Run ID", report.run_id.to_string()),
            ("Started", report.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ("Length", report.length.to_string()),
            ("Payload", report.payload.to_string()),
            ("Threads", report.threads.to_string()),
        ]
    }

    /// Plain sentence describing which strategy won and by how much
    pub(crate) fn comparison_text(report: &BenchReport) -> String {
        match (report.fastest(), report.speedup()) {
            (Some(fastest), Some(ratio)) => {
                format!("{} was faster by {:.2}x", fastest.strategy.label(), ratio)
            }
            (Some(fastest), None) => format!("{} was faster", fastest.strategy.label()),
            (None, _) => "Both strategies took the same time".to_string(),
        }
    }

    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "=".repeat(title.chars().count() + 4);

        writeln!(output, "{}", border).map_err(write_err)?;
        writeln!(output, "  {}  ", title).map_err(write_err)?;
        write!(output, "{}", border).map_err(write_err)?;

        Ok(output)
    }

    fn format_comparison(&self, report: &BenchReport) -> String {
        format!("Comparison: {}", Self::comparison_text(report))
    }
}

pub(crate) fn write_err(e: std::fmt::Error) -> AppError {
    AppError::output(format!("Failed to format report: {}", e))
}

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &BenchReport) -> Result<String> {
        let lines: Vec<String> = report.measurements.iter().map(Measurement::display_line).collect();

        if !self.options.verbose_mode {
            return Ok(lines.join("\n"));
        }

        let mut output = String::new();
        writeln!(output, "{}", self.format_header("Map Benchmark Results")?).map_err(write_err)?;
        for (name, value) in Self::run_details(report) {
            writeln!(output, "{:<9} {}", format!("{}:", name), value).map_err(write_err)?;
        }
        writeln!(output).map_err(write_err)?;
        for line in &lines {
            writeln!(output, "{}", line).map_err(write_err)?;
        }
        writeln!(output).map_err(write_err)?;
        write!(output, "{}", self.format_comparison(report)).map_err(write_err)?;

        Ok(output)
    }

    fn format_warning(&self, warning: &ValidationWarning) -> Result<String> {
        Ok(warning.format(false))
    }
}
