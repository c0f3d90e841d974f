//! Handler functions for the CLI commands.
//!
//! Config subcommands operate on the persisted [`Configuration`] record;
//! `ping` runs the reachability probe against the configured service.

use kamnav_client::{ClientConnector, ConnectionStatus};
use kamnav_core::{Configuration, Error, Result};

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = Configuration::resolve_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `kamnav config init` to create it)");
    }
    Ok(())
}

/// Get a configuration value by key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = Configuration::load(config_path)?;
    match key {
        "service-url" => println!("{}", config.service_url),
        "timeout-seconds" => println!("{}", config.timeout_seconds),
        other => {
            return Err(Error::config(format!(
                "Unknown key '{other}' (expected service-url or timeout-seconds)"
            )));
        }
    }
    Ok(())
}

/// Set a configuration value by key and persist the result.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let mut config = Configuration::load(config_path)?;
    match key {
        "service-url" => config.service_url = value.to_string(),
        "timeout-seconds" => {
            let seconds: u64 = value
                .parse()
                .map_err(|_| Error::config(format!("'{value}' is not a valid timeout")))?;
            config = Configuration::new(config.service_url, seconds);
        }
        other => {
            return Err(Error::config(format!(
                "Unknown key '{other}' (expected service-url or timeout-seconds)"
            )));
        }
    }
    config.save(config_path)?;
    println!("Set {key} = {value}");
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<()> {
    let path = Configuration::resolve_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    Configuration::default().save_to(&path)?;
    println!("Config file created at {}", path.display());
    Ok(())
}

/// Probe the configured service and report reachability.
///
/// An unreachable service is a reported outcome, not a command failure.
pub async fn cmd_ping(config_path: Option<&str>) -> Result<()> {
    let config = Configuration::load(config_path)?;
    let url = config.service_url.clone();
    let connector = ClientConnector::new(config).map_err(|e| Error::config(e.to_string()))?;

    match connector.probe().await {
        ConnectionStatus::Connected => println!("Connected to {url}"),
        ConnectionStatus::Unreachable(reason) => {
            println!("Could not reach {url}: {reason}");
            println!("Check the service configuration with `kamnav config path`.");
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
