//! Colored formatter implementation with terminal color support

use super::formatter::{write_err, FormattingOptions, OutputFormatter, PlainFormatter};
use crate::{
    config::ValidationWarning,
    error::Result,
    models::{BenchReport, Measurement},
};
use colored::*;
use std::fmt::Write as _;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub faster: Color,
    pub slower: Color,
    pub tie: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            faster: Color::Green,
            slower: Color::Yellow,
            tie: Color::Cyan,
        }
    }
}

/// Colored formatter implementation
///
/// Result lines keep their exact text; only ANSI styling is added around the
/// label and the value.
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Apply dimmed formatting if colors are enabled
    fn dimmed(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.dimmed()
        } else {
            text.normal()
        }
    }

    fn line_with_value_color(&self, measurement: &Measurement, value_color: Color) -> String {
        format!(
            "{} 시간: {} 밀리초",
            self.bold(measurement.strategy.label()),
            self.colorize(&measurement.elapsed_ms().to_string(), value_color),
        )
    }

    /// Faster strategy in green, slower in yellow, both in the default value color on a tie
    fn value_color(&self, report: &BenchReport, measurement: &Measurement) -> Color {
        match report.fastest() {
            Some(fastest) if fastest.strategy == measurement.strategy => self.color_scheme.faster,
            Some(_) => self.color_scheme.slower,
            None => self.color_scheme.tie,
        }
    }

    fn format_header(&self, title: &str) -> Result<String> {
        let mut output = String::new();
        let border = "═".repeat(title.chars().count() + 4);

        writeln!(output, "{}", self.colorize(&border, self.color_scheme.header)).map_err(write_err)?;
        writeln!(output, "  {}  ", self.bold(title)).map_err(write_err)?;
        write!(output, "{}", self.colorize(&border, self.color_scheme.header)).map_err(write_err)?;

        Ok(output)
    }

    fn format_comparison(&self, report: &BenchReport) -> String {
        format!(
            "{} {}",
            self.bold("Comparison:"),
            self.colorize(&PlainFormatter::comparison_text(report), self.color_scheme.faster),
        )
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_report(&self, report: &BenchReport) -> Result<String> {
        let lines: Vec<String> = report
            .measurements
            .iter()
            .map(|m| self.line_with_value_color(m, self.value_color(report, m)))
            .collect();

        if !self.options.verbose_mode {
            return Ok(lines.join("\n"));
        }

        let mut output = String::new();
        writeln!(output, "{}", self.format_header("Map Benchmark Results")?).map_err(write_err)?;
        for (name, value) in PlainFormatter::run_details(report) {
            writeln!(output, "{} {}", self.dimmed(&format!("{:<9}", format!("{}:", name))), value)
                .map_err(write_err)?;
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
        Ok(warning.format(self.options.enable_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationLevel;
    use crate::models::Config;
    use crate::types::MapStrategy;
    use chrono::Utc;
    use std::time::Duration;

    fn report() -> BenchReport {
        BenchReport::new(
            &Config::default(),
            1,
            Utc::now(),
            vec![
                Measurement::new(MapStrategy::Native, Duration::from_micros(2000), 10),
                Measurement::new(MapStrategy::Library, Duration::from_micros(500), 10),
            ],
        )
    }

    #[test]
    fn test_disabled_colors_match_plain_lines() {
        let formatter = ColoredFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: false,
        });
        let output = formatter.format_report(&report()).unwrap();
        assert_eq!(output, "ES6 Map 시간: 2 밀리초\nLodash Map 시간: 0.5 밀리초");
    }

    #[test]
    fn test_enabled_colors_keep_visible_text() {
        colored::control::set_override(true);
        let formatter = ColoredFormatter::new(FormattingOptions::default());
        let output = formatter.format_report(&report()).unwrap();
        colored::control::unset_override();

        let stripped = regex::Regex::new(r"\x1b\[[0-9;]*m")
            .unwrap()
            .replace_all(&output, "")
            .to_string();
        assert_eq!(stripped, "ES6 Map 시간: 2 밀리초\nLodash Map 시간: 0.5 밀리초");
    }

    #[test]
    fn test_verbose_comparison_names_faster_strategy() {
        let formatter = ColoredFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: true,
        });
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Lodash Map was faster by 4.00x"));
        assert!(output.contains("Payload:  records"));
    }

    #[test]
    fn test_warning_keeps_plain_text_without_color() {
        let formatter = ColoredFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: false,
        });
        let warning = ValidationWarning::new(ValidationLevel::Info, "small length".to_string());
        assert_eq!(formatter.format_warning(&warning).unwrap(), "[INFO] small length");
    }
}
