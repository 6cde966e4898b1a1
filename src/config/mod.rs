//! Configuration management module
//!
//! The survey runs from a single immutable [`Config`] assembled from the
//! parsed CLI arguments. Nothing here is persisted; store and export
//! locations are explicit values handed to the components that need them.

use crate::{
    cli::Cli,
    error::{AppError, Result},
};
use std::path::PathBuf;
use std::time::Duration;

/// Immutable invocation parameters for one survey
#[derive(Debug, Clone)]
pub struct Config {
    /// Location label attached to every sample
    pub room: String,

    /// Number of measurement iterations
    pub runs: u32,

    /// Delay between iterations (not applied after the last)
    pub wait: Duration,

    /// Gateway address probed for local latency
    pub target: String,

    /// SQLite database location
    pub database_path: PathBuf,

    /// CSV export location
    pub csv_path: PathBuf,

    /// Whether to use colored console output
    pub enable_color: bool,

    /// Verbose diagnostics
    pub verbose: bool,

    /// Debug diagnostics
    pub debug: bool,
}

impl Config {
    /// Validate the assembled configuration
    pub fn validate(&self) -> Result<()> {
        if self.room.trim().is_empty() {
            return Err(AppError::config("room label must not be empty"));
        }
        if self.target.trim().is_empty() {
            return Err(AppError::config("target address must not be empty"));
        }
        Ok(())
    }
}

/// Build and validate the complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    cli.validate().map_err(AppError::config)?;

    let enable_color = cli.use_colors();
    let config = Config {
        room: cli.room,
        runs: cli.runs,
        wait: Duration::from_secs(cli.wait),
        target: cli.target,
        database_path: cli.database,
        csv_path: cli.csv,
        enable_color,
        verbose: cli.verbose,
        debug: cli.debug,
    };

    config.validate()?;
    Ok(config)
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Room: {}", config.room));
    summary.push(format!("Runs: {}", config.runs));
    summary.push(format!("Wait: {}s", config.wait.as_secs()));
    summary.push(format!("Target: {}", config.target));
    summary.push(format!("Database: {}", config.database_path.display()));
    summary.push(format!("CSV export: {}", config.csv_path.display()));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
