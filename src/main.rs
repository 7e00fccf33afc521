//! Map Bench - Main CLI Application
//!
//! Times the native iterator map against a utility-library map over a large
//! generated sequence and prints one result line per strategy.

use clap::Parser;
use map_bench::{app::App, cli::Cli, config::resolve_color_with, error::ErrorReporter};
use std::process;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = Cli::parse();
    let verbose = cli.verbose || cli.debug;

    let result = match App::new(cli.clone()) {
        Ok(app) => app.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        // Decided after the run so a loaded .env file is taken into account
        let use_color = resolve_color_with(&cli, |key| std::env::var(key).ok());
        colored::control::set_override(use_color);

        ErrorReporter::new(use_color, verbose).report_error(&e);
        process::exit(e.exit_code());
    }
}
