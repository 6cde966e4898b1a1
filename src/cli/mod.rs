//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

/// WiFi Survey - measure per-room gateway latency and internet throughput
#[derive(Parser, Debug, Clone)]
#[command(name = "wifi-survey")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Room where the measurements are taken (attached to every sample)
    #[arg(short, long)]
    pub room: String,

    /// Number of times to repeat the measurement
    #[arg(long, default_value_t = crate::defaults::DEFAULT_RUNS)]
    pub runs: u32,

    /// Seconds to wait between runs (not after the last)
    #[arg(long, default_value_t = crate::defaults::DEFAULT_WAIT_SECONDS)]
    pub wait: u64,

    /// Gateway address probed for local latency
    #[arg(long, default_value = crate::defaults::DEFAULT_TARGET)]
    pub target: String,

    /// Path of the SQLite results database
    #[arg(long, env = "WIFI_SURVEY_DB", default_value = crate::defaults::DEFAULT_DB_PATH)]
    pub database: PathBuf,

    /// Path of the CSV export written after the last run
    #[arg(long, env = "WIFI_SURVEY_CSV", default_value = crate::defaults::DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.room.trim().is_empty() {
            return Err("Room label must not be empty".to_string());
        }

        if self.target.trim().is_empty() {
            return Err("Target address must not be empty".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    true
}
