//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{Cli, supports_color},
    models::Config,
    error::{AppError, Result},
    config::env::EnvManager,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        EnvManager::load_env_file(self.cli.debug)?;
        self.parse_with_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from defaults, `lookup` and the CLI, in that order
    pub fn parse_with_lookup<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.cli.validate().map_err(AppError::validation)?;

        let mut config = Config::default();
        config.merge_from_lookup(lookup)?;
        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(length) = self.cli.length {
            config.length = length;
        }

        if let Some(payload) = self.cli.payload {
            config.payload = payload;
        }

        if let Some(threads) = self.cli.threads {
            config.threads = threads;
        }

        if let Some(format) = self.cli.format {
            config.output_format = format;
        }

        config.enable_color = resolve_color(&self.cli, config.enable_color);

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Decide whether output is colored.
///
/// `--color` forces, `--no-color` disables, otherwise `enable_color` must be
/// set and the terminal must support it.
pub fn resolve_color(cli: &Cli, enable_color: bool) -> bool {
    if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        enable_color && supports_color()
    }
}

/// Color decision from `lookup` and the CLI, for output produced without a `Config`.
///
/// An unreadable `ENABLE_COLOR` falls back to the default.
pub fn resolve_color_with<F>(cli: &Cli, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let enable_color = lookup("ENABLE_COLOR")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(crate::defaults::DEFAULT_ENABLE_COLOR);
    resolve_color(cli, enable_color)
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Length: {}", config.length));
    summary.push(format!("Payload: {}", config.payload));
    summary.push(format!("Threads: {} (resolved {})", config.threads, config.resolved_threads()));
    summary.push(format!("Output Format: {}", config.output_format));
    summary.push(format!("Estimated Peak Memory: {}",
        crate::config::validation::format_bytes(config.estimated_peak_bytes())));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
