//! Topic help with examples and configuration reference

use crate::config::env::EnvManager;
use colored::*;

/// Help text for the CLI application
pub struct HelpSystem {
    platform: &'static str,
    logical_cpus: usize,
}

impl HelpSystem {
    /// Topics accepted by `--help-topic`
    pub const TOPICS: [&'static str; 4] = ["config", "payload", "output", "examples"];

    /// Create a new help system
    pub fn new() -> Self {
        Self {
            platform: std::env::consts::OS,
            logical_cpus: num_cpus::get(),
        }
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        help.push_str(&self.format_header(use_colors));
        help.push('\n');
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_environment_section(use_colors));
        help.push('\n');
        help.push_str(&self.format_footer(use_colors));

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "config" | "configuration" | "env" => Some(self.format_configuration_help(use_colors)),
            "payload" | "payloads" => Some(self.format_payload_help(use_colors)),
            "output" | "formatting" => Some(self.format_output_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            _ => None,
        }
    }

    fn section_header(&self, title: &str, use_colors: bool) -> String {
        if use_colors {
            title.bright_green().bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn format_header(&self, use_colors: bool) -> String {
        let title = "Map Bench";
        let subtitle = "Single-shot timing of native iterator map versus a utility-library map";
        let version = env!("CARGO_PKG_VERSION");
        let platform = format!("{} ({} logical CPUs)", self.platform, self.logical_cpus);

        if use_colors {
            format!(
                "{}\n{}\nVersion: {} | Platform: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                version.green(),
                platform.yellow()
            )
        } else {
            format!(
                "{}\n{}\nVersion: {} | Platform: {}\n",
                title, subtitle, version, platform
            )
        }
    }

    fn format_usage_section(&self, use_colors: bool) -> String {
        let usage_patterns = [
            "map-bench [OPTIONS]",
            "map-bench --length <N> [--payload records|numbers] [OPTIONS]",
            "map-bench --help-topic <TOPIC>",
            "map-bench --init-env <PATH>",
        ];

        let mut usage = format!("{}\n", self.section_header("USAGE:", use_colors));
        for pattern in usage_patterns {
            if use_colors {
                usage.push_str(&format!("  {}\n", pattern.bright_white()));
            } else {
                usage.push_str(&format!("  {}\n", pattern));
            }
        }

        usage
    }

    fn format_options_section(&self, use_colors: bool) -> String {
        let options = [
            OptionHelp {
                short: Some("n"),
                long: "length",
                value: "<N>",
                description: "Elements generated and transformed per measurement",
                example: Some("--length 30_000_000"),
            },
            OptionHelp {
                short: Some("p"),
                long: "payload",
                value: "<KIND>",
                description: "Map each index to a user record or to a number (records|numbers)",
                example: Some("--payload numbers"),
            },
            OptionHelp {
                short: Some("t"),
                long: "threads",
                value: "<N>",
                description: "Worker threads for the library map (0 = all logical CPUs)",
                example: Some("--threads 0"),
            },
            OptionHelp {
                short: Some("f"),
                long: "format",
                value: "<FORMAT>",
                description: "Result format (text|json)",
                example: Some("--format json"),
            },
            OptionHelp {
                short: None,
                long: "verbose",
                value: "",
                description: "Show a header, the results and a comparison",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "debug",
                value: "",
                description: "Print build and configuration details and JSON logs",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "color",
                value: "",
                description: "Force colored output even when stdout is not a terminal",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "no-color",
                value: "",
                description: "Disable colored output",
                example: None,
            },
            OptionHelp {
                short: None,
                long: "help-topic",
                value: "<TOPIC>",
                description: "Show help for a topic (config|payload|output|examples)",
                example: Some("--help-topic config"),
            },
            OptionHelp {
                short: None,
                long: "init-env",
                value: "<PATH>",
                description: "Write an example .env file and exit",
                example: Some("--init-env .env"),
            },
        ];

        let mut output = format!("{}\n", self.section_header("OPTIONS:", use_colors));
        for option in options {
            output.push_str(&option.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_examples_section(&self, use_colors: bool) -> String {
        let examples = [
            ExampleHelp {
                title: "Default run",
                command: "map-bench",
                description: "Map one million indices to user records with both strategies",
            },
            ExampleHelp {
                title: "Large sequence",
                command: "map-bench --length 30_000_000",
                description: "Thirty million records; needs several GiB of memory",
            },
            ExampleHelp {
                title: "Numeric payload",
                command: "map-bench --length 100_000_000 --payload numbers",
                description: "Double each index instead of building records",
            },
            ExampleHelp {
                title: "Parallel library map",
                command: "map-bench --threads 0 --verbose",
                description: "Let the library map use every logical CPU and show the comparison",
            },
            ExampleHelp {
                title: "Machine-readable output",
                command: "map-bench --format json --no-color",
                description: "Print a JSON report for scripts",
            },
        ];

        let mut output = format!("{}\n", self.section_header("EXAMPLES:", use_colors));
        for example in examples {
            output.push_str(&example.format(use_colors));
            output.push('\n');
        }

        output
    }

    fn format_environment_section(&self, use_colors: bool) -> String {
        let mut output = format!("{}\n", self.section_header("ENVIRONMENT VARIABLES:", use_colors));
        output.push_str("Configuration priority: CLI arguments > Environment variables > .env file > Defaults\n\n");

        for (var_name, description, _example) in EnvManager::get_supported_env_vars() {
            if use_colors {
                output.push_str(&format!("  {}: {}\n",
                    var_name.bright_yellow().bold(),
                    description.white()
                ));
            } else {
                output.push_str(&format!("  {}: {}\n", var_name, description));
            }
        }

        output
    }

    fn format_footer(&self, use_colors: bool) -> String {
        let mut footer = format!("{}\n", self.section_header("ADDITIONAL HELP:", use_colors));

        let help_topics = [
            ("--help-topic config", "Configuration sources, limits and environment variables"),
            ("--help-topic payload", "What each payload produces"),
            ("--help-topic output", "Reading the results"),
            ("--help-topic examples", "Usage examples"),
        ];

        for (command, description) in help_topics {
            if use_colors {
                footer.push_str(&format!("  {}: {}\n",
                    command.bright_yellow(),
                    description.white()
                ));
            } else {
                footer.push_str(&format!("  {}: {}\n", command, description));
            }
        }

        footer
    }

    fn format_configuration_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", self.section_header("CONFIGURATION REFERENCE:", use_colors));

        help.push_str("CONFIGURATION PRIORITY (highest to lowest):\n");
        help.push_str("1. Command-line arguments\n");
        help.push_str("2. Environment variables\n");
        help.push_str("3. .env file in the working directory\n");
        help.push_str("4. Default values\n\n");

        help.push_str("PARAMETER LIMITS:\n");
        help.push_str(&format!("- Length: any non-negative integer (default {})\n", crate::defaults::DEFAULT_LENGTH));
        help.push_str(&format!("- Threads: 0-{} (0 uses all {} logical CPUs)\n",
            crate::defaults::MAX_THREADS, self.logical_cpus));
        help.push_str("- Memory is not capped; a warning is printed when the estimate exceeds 4 GiB\n\n");

        help.push_str("ENVIRONMENT VARIABLES:\n");
        for (var_name, description, example) in EnvManager::get_supported_env_vars() {
            help.push_str(&format!("- {}: {} (e.g. {})\n", var_name, description, example));
        }

        help
    }

    fn format_payload_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", self.section_header("PAYLOADS:", use_colors));

        help.push_str("records (default):\n");
        help.push_str("  Each index i becomes a user record with id = i + 1 and fixed\n");
        help.push_str("  username, email, name, birth date, gender, phone, address and\n");
        help.push_str("  membership fields.\n\n");
        help.push_str("numbers:\n");
        help.push_str("  Each index i becomes i * 2.\n\n");
        help.push_str("Both strategies generate the index sequence inside the timed block,\n");
        help.push_str("so generation time is part of every measurement.\n");

        help
    }

    fn format_output_help(&self, use_colors: bool) -> String {
        let mut help = format!("{}\n\n", self.section_header("OUTPUT:", use_colors));

        help.push_str("Text format prints one line per strategy:\n");
        help.push_str("  ES6 Map 시간: <elapsed> 밀리초     native Iterator::map\n");
        help.push_str("  Lodash Map 시간: <elapsed> 밀리초  rayon parallel map\n\n");
        help.push_str("JSON format prints a single report object with run_id, started_at,\n");
        help.push_str("length, payload, threads, measurements and the faster strategy.\n\n");
        help.push_str("Each value comes from a single run with no warm-up. Expect the numbers\n");
        help.push_str("to move between runs, especially for sizes close to available memory.\n");

        help
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for formatting individual options
struct OptionHelp {
    short: Option<&'static str>,
    long: &'static str,
    value: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

impl OptionHelp {
    fn format(&self, use_colors: bool) -> String {
        let mut option_str = String::new();

        if let Some(short) = self.short {
            if use_colors {
                option_str.push_str(&format!("  {}, ", format!("-{}", short).bright_cyan()));
            } else {
                option_str.push_str(&format!("  -{}, ", short));
            }
        } else {
            option_str.push_str("      ");
        }

        let long_with_value = if self.value.is_empty() {
            format!("--{}", self.long)
        } else {
            format!("--{} {}", self.long, self.value)
        };

        if use_colors {
            option_str.push_str(&format!("{:<30} {}",
                long_with_value.bright_cyan(),
                self.description.white()
            ));
        } else {
            option_str.push_str(&format!("{:<30} {}", long_with_value, self.description));
        }

        if let Some(example) = self.example {
            if use_colors {
                option_str.push_str(&format!("\n{}{}", " ".repeat(36),
                    format!("Example: {}", example).bright_blue().italic()
                ));
            } else {
                option_str.push_str(&format!("\n{}Example: {}", " ".repeat(36), example));
            }
        }

        option_str
    }
}

/// Helper struct for formatting examples
struct ExampleHelp {
    title: &'static str,
    command: &'static str,
    description: &'static str,
}

impl ExampleHelp {
    fn format(&self, use_colors: bool) -> String {
        if use_colors {
            format!("  {}:\n    {}\n    {}\n",
                self.title.bright_yellow().bold(),
                self.command.bright_white(),
                self.description.bright_blue().italic()
            )
        } else {
            format!("  {}:\n    {}\n    {}\n",
                self.title, self.command, self.description
            )
        }
    }
}
