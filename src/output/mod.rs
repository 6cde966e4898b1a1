//! User-facing console output
//!
//! The survey prints three kinds of lines: a progress header per run, the
//! measured metrics of that run (a failed metric prints literally as
//! `none`), and a completion summary after the export.

use crate::models::ThroughputReading;
use colored::Colorize;
use std::path::Path;

/// Placeholder printed for a metric whose probe failed
const ABSENT: &str = "none";

/// Console printer for survey progress and results
#[derive(Debug, Clone)]
pub struct RunPrinter {
    enable_color: bool,
}

impl RunPrinter {
    pub fn new(enable_color: bool) -> Self {
        Self { enable_color }
    }

    /// Print the per-run progress header
    pub fn run_header(&self, run: u32, total: u32, room: &str) {
        if self.enable_color {
            println!("Run {}/{} in '{}'...", run, total, room.cyan().bold());
        } else {
            println!("Run {}/{} in '{}'...", run, total, room);
        }
    }

    /// Print one run's measured metrics
    pub fn metrics(&self, latency_ms: Option<f64>, throughput: &ThroughputReading) {
        println!("  Local latency: {}", self.metric(latency_ms, "ms"));
        println!("  Download: {}", self.metric(throughput.download_mbps, "Mbps"));
        println!("  Upload: {}", self.metric(throughput.upload_mbps, "Mbps"));
    }

    /// Print the completion summary after the export
    pub fn summary(&self, rows_exported: usize, database: &Path, csv: &Path) {
        let message = format!(
            "Results saved to {} and exported {} row{} to {}.",
            database.display(),
            rows_exported,
            if rows_exported == 1 { "" } else { "s" },
            csv.display()
        );
        if self.enable_color {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    /// Format a single metric value with its unit, or the absent marker
    fn metric(&self, value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => {
                let text = format!("{} {}", v, unit);
                if self.enable_color {
                    text.bright_white().to_string()
                } else {
                    text
                }
            }
            None => {
                if self.enable_color {
                    ABSENT.yellow().to_string()
                } else {
                    ABSENT.to_string()
                }
            }
        }
    }
}
