//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{
        display_config_summary, load_config, resolve_color_with, validate_config, EnvManager,
        ValidationLevel,
    },
    error::Result,
    executor::BenchmarkExecutor,
    logging::LoggerFactory,
    models::Config,
    output::OutputCoordinator,
};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self { cli })
    }

    /// Run the application
    ///
    /// Results go to stdout; diagnostics, warnings and logs go to stderr.
    pub async fn run(self) -> Result<()> {
        if self.cli.should_show_topic_help() {
            let use_colors = resolve_color_with(&self.cli, |key| std::env::var(key).ok());
            println!("{}", self.cli.display_help(use_colors));
            return Ok(());
        }

        if let Some(path) = &self.cli.init_env {
            EnvManager::save_example_env_file(path)?;
            eprintln!("Wrote example configuration to {}", path.display());
            return Ok(());
        }

        let config = load_config(self.cli.clone())?;
        colored::control::set_override(config.enable_color);

        let factory = LoggerFactory::new(config.clone());
        let logger = factory.create_logger("app");

        if config.debug {
            eprintln!("{}", Self::debug_header(&config));
        }

        logger
            .debug("Configuration loaded")
            .field("length", config.length)
            .field("payload", config.payload.as_str())
            .field("threads", config.threads)
            .field("format", config.output_format.as_str())
            .log();

        let coordinator = OutputCoordinator::from_config(&config);
        let warnings = validate_config(&config)?;
        for warning in &warnings {
            if warning.level == ValidationLevel::Warning || config.verbose {
                eprintln!("{}", coordinator.display_warning(warning)?);
            }
        }

        // Pool construction happens here so it never lands inside a measurement
        let executor = BenchmarkExecutor::new(&config)?
            .with_logger(factory.create_measurement_logger());

        logger
            .debug("Thread pool built")
            .field("threads", executor.threads())
            .log();

        let report = tokio::task::spawn_blocking(move || executor.run()).await?;

        logger
            .info("Benchmark finished")
            .field("run_id", report.run_id.to_string())
            .field("faster", report.faster)
            .log();

        println!("{}", coordinator.display_report(&report)?);

        Ok(())
    }

    fn debug_header(config: &Config) -> String {
        let mut lines = vec![
            format!("{} v{}", crate::PKG_NAME, crate::VERSION),
            format!("Built: {} ({})", crate::build_info::BUILD_TIME, crate::build_info::BUILD_PROFILE),
            format!("Target: {}", crate::build_info::TARGET_TRIPLE),
        ];
        if let Some(commit) = crate::build_info::GIT_COMMIT {
            lines.push(format!("Commit: {}", commit));
        }
        lines.push(format!("Logical CPUs: {}", num_cpus::get()));
        lines.push(String::new());
        lines.push("Configuration Summary:".to_string());
        lines.push(display_config_summary(config));
        lines.join("\n")
    }
}
