//! Kamnav CLI
//!
//! Command-line administration for the KAM web-service connection:
//! config file management and a reachability probe.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Kamnav - KAM web-service connection administration
#[derive(Parser, Debug)]
#[command(name = "kamnav")]
#[command(about = "KAM navigator connection administration tool", long_about = None)]
struct Args {
    /// Configuration file path (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Probe the configured KAM web service
    Ping,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a configuration value (service-url, timeout-seconds)
    Get {
        /// Key to read
        key: String,
    },
    /// Set a configuration value and persist it
    Set {
        /// Key to write
        key: String,
        /// New value
        value: String,
    },
    /// Create a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command {
        Command::Config { action } => match action {
            ConfigAction::Path => commands::cmd_config_path(config_path)?,
            ConfigAction::Get { key } => commands::cmd_config_get(config_path, &key)?,
            ConfigAction::Set { key, value } => {
                commands::cmd_config_set(config_path, &key, &value)?
            }
            ConfigAction::Init { force } => commands::cmd_config_init(config_path, force)?,
        },
        Command::Ping => commands::cmd_ping(config_path).await?,
    }

    Ok(())
}
