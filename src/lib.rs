//! WiFi Survey
//!
//! A room-by-room WiFi survey tool that measures local gateway latency and
//! internet throughput using system network utilities, records every sample
//! in an embedded SQLite store, and exports the accumulated results to CSV.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Sample, ThroughputReading};
pub use probe::{LatencyProber, NetworkQualityProber, PingProber, ProbeError, ThroughputProber};
pub use store::SampleStore;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Gateway address probed for local latency.
    pub const DEFAULT_TARGET: &str = "192.168.1.254";
    /// Packets sent per latency probe.
    pub const PING_COUNT: u32 = 4;
    pub const DEFAULT_RUNS: u32 = 1;
    pub const DEFAULT_WAIT_SECONDS: u64 = 1;
    pub const DEFAULT_DB_PATH: &str = "wifi_results.db";
    pub const DEFAULT_CSV_PATH: &str = "wifi_results.csv";
}
