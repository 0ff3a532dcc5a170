mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use helmdapr_config::AppConfig;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    logging::init(&config.log.filter);

    commands::run(cli.command, &config).await
}
