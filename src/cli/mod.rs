//! Command-line interface module with topic help

pub mod help;

pub use help::HelpSystem;

use crate::types::{OutputFormat, Payload};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Map Bench - times native iterator map against a utility-library map
#[derive(Parser, Debug, Clone)]
#[command(name = "map-bench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of elements to generate and transform per measurement
    #[arg(short = 'n', long, value_parser = parse_length_arg)]
    pub length: Option<usize>,

    /// What each index is mapped to
    #[arg(short, long, value_enum)]
    pub payload: Option<Payload>,

    /// Worker threads for the library map (0 = all logical CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Output format for the results
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Show help for specific topic (config, payload, output, examples)
    #[arg(long, value_name = "TOPIC")]
    pub help_topic: Option<String>,

    /// Write an example .env file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub init_env: Option<PathBuf>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let Some(threads) = self.threads {
            if threads > crate::defaults::MAX_THREADS {
                return Err(format!(
                    "--threads cannot exceed {}, got {}",
                    crate::defaults::MAX_THREADS,
                    threads
                ));
            }
        }

        Ok(())
    }

    /// Check if help should be displayed for a specific topic
    pub fn should_show_topic_help(&self) -> bool {
        self.help_topic.is_some()
    }

    /// Get the help topic if specified
    pub fn get_help_topic(&self) -> Option<&str> {
        self.help_topic.as_deref()
    }

    /// Display help for the specified topic or main help
    pub fn display_help(&self, use_colors: bool) -> String {
        let help_system = HelpSystem::new();

        if let Some(topic) = self.get_help_topic() {
            help_system.display_topic_help(topic, use_colors)
                .unwrap_or_else(|| {
                    format!("Unknown help topic: '{}'\n\nAvailable topics: {}\n\n{}",
                        topic,
                        HelpSystem::TOPICS.join(", "),
                        help_system.display_main_help(use_colors))
                })
        } else {
            help_system.display_main_help(use_colors)
        }
    }
}

/// Parse `--length`, accepting `_` separators
fn parse_length_arg(s: &str) -> Result<usize, String> {
    crate::models::config::parse_length(s)
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing_basic() {
        let cli = Cli::parse_from(&["test", "--length", "5", "--threads", "2"]);
        assert_eq!(cli.length, Some(5));
        assert_eq!(cli.threads, Some(2));
        assert!(cli.payload.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from(&[
            "test",
            "-n", "60_000_000",
            "--payload", "numbers",
            "--threads", "0",
            "--format", "json",
            "--no-color",
            "--verbose",
            "--debug",
            "--help-topic", "config",
            "--init-env", "/tmp/example.env",
        ]);

        assert_eq!(cli.length, Some(60_000_000));
        assert_eq!(cli.payload, Some(Payload::Numbers));
        assert_eq!(cli.threads, Some(0));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.debug);
        assert_eq!(cli.get_help_topic(), Some("config"));
        assert_eq!(cli.init_env.unwrap(), PathBuf::from("/tmp/example.env"));
    }

    #[test]
    fn test_invalid_values_rejected_by_parser() {
        assert!(Cli::try_parse_from(&["test", "--length", "-3"]).is_err());
        assert!(Cli::try_parse_from(&["test", "--length", "many"]).is_err());
        assert!(Cli::try_parse_from(&["test", "--payload", "strings"]).is_err());
        assert!(Cli::try_parse_from(&["test", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_help_topic_methods() {
        let cli_with_topic = Cli::parse_from(&["test", "--help-topic", "payload"]);
        assert!(cli_with_topic.should_show_topic_help());
        assert_eq!(cli_with_topic.get_help_topic(), Some("payload"));

        let cli_without_topic = Cli::parse_from(&["test"]);
        assert!(!cli_without_topic.should_show_topic_help());
        assert_eq!(cli_without_topic.get_help_topic(), None);
    }

    #[test]
    fn test_cli_validation() {
        let cli_conflict = Cli::parse_from(&["test", "--color", "--no-color"]);
        assert!(cli_conflict.validate().unwrap_err().contains("Cannot specify both --color and --no-color"));

        let cli_threads = Cli::parse_from(&["test", "--threads", "5000"]);
        assert!(cli_threads.validate().unwrap_err().contains("--threads cannot exceed"));

        assert!(Cli::parse_from(&["test"]).validate().is_ok());
        assert!(Cli::parse_from(&["test", "--no-color", "-n", "0"]).validate().is_ok());
    }

    #[test]
    fn test_help_display() {
        let cli = Cli::parse_from(&["test", "--no-color"]);
        let help = cli.display_help(false);
        assert!(help.contains("Map Bench"));
        assert!(help.contains("USAGE:"));

        let cli_with_topic = Cli::parse_from(&["test", "--no-color", "--help-topic", "CONFIG"]);
        assert!(cli_with_topic.display_help(false).contains("CONFIGURATION REFERENCE"));

        let cli_invalid_topic = Cli::parse_from(&["test", "--no-color", "--help-topic", "histogram"]);
        let invalid_help = cli_invalid_topic.display_help(false);
        assert!(invalid_help.contains("Unknown help topic: 'histogram'"));
        assert!(invalid_help.contains("Available topics:"));
    }
}
