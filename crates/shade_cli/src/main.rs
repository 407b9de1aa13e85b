//! CLI entry point for shade.

mod cli;
mod commands;
mod output;

use clap::Parser;
use shade_constant::app;
use shade_observability::ObservabilityConfig;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Project .env may carry SHADE_CONFIG / SHADE_LOG
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut log_config = ObservabilityConfig::from_env()
        .with_ansi(console::colors_enabled_stderr());
    if cli.verbose {
        log_config = log_config.with_log_level("debug");
    }
    if let Err(e) = shade_observability::init(log_config) {
        output::warning(&format!("logging disabled: {e}"));
    }
    tracing::debug!(name = app::NAME, version = app::VERSION, "starting");

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
