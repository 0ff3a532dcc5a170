use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "helmdapr", version, about = "Install Dapr through a swappable installer")]
pub struct Cli {
    /// Read configuration from this file instead of the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the sample installer once
    Install {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Remove an installation by id
    Uninstall {
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Install a chart through the release installer (fake release client)
    Release {
        #[arg(long)]
        chart: Option<String>,
        #[arg(long)]
        namespace: Option<String>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        id: i64,
        /// Chart values as key=value; values that parse as JSON are kept typed
        #[arg(long = "set")]
        values: Vec<String>,
    },
    /// Create and list namespaces, list pods through a reactor, then install
    Demo,
    /// Write the default config file
    InitConfig,
}
