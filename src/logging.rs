//! Diagnostic logging for the WiFi survey tool
//!
//! Carries the probe diagnostics that belong on the console: failed
//! invocations, unexpected tool output, per-run timing. User-facing
//! progress lines stay on plain stdout (see [`crate::output`]); this logger
//! is for the operator reading `--verbose`/`--debug` output.

use chrono::Utc;
use serde_json::json;
use std::io::{self, Write};

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - degraded but continuing (failed probes land here)
    Warn = 2,
    /// Error level - error events but application can continue
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

/// Output format for log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console lines
    Text,
    /// One JSON object per line, for log collectors
    Json,
}

/// Console logger with leveled, optionally colored output
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Output format
    format: LogFormat,
    /// Logger name/component
    name: String,
}

impl Logger {
    /// Create a logger for the named component
    pub fn new(name: impl Into<String>, min_level: LogLevel, use_color: bool) -> Self {
        Self {
            min_level,
            use_color,
            format: LogFormat::Text,
            name: name.into(),
        }
    }

    /// Derive the logger settings from the survey configuration
    pub fn from_config(config: &crate::config::Config) -> Self {
        let min_level = if config.debug {
            LogLevel::Debug
        } else if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };
        Self::new(crate::PKG_NAME, min_level, config.enable_color)
    }

    /// Switch the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let line = self.format_entry(level, message);
        // Diagnostics share stdout with the progress lines, matching the
        // original tool's behavior
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", line);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Render one log entry in the configured format
    fn format_entry(&self, level: LogLevel, message: &str) -> String {
        match self.format {
            LogFormat::Text => {
                let timestamp = Utc::now().format("%H:%M:%S%.3f");
                if self.use_color {
                    format!(
                        "{}[{}]{} {} {}: {}",
                        level.color_code(),
                        level.as_str(),
                        LogLevel::reset_code(),
                        timestamp,
                        self.name,
                        message
                    )
                } else {
                    format!("[{}] {} {}: {}", level.as_str(), timestamp, self.name, message)
                }
            }
            LogFormat::Json => json!({
                "timestamp": Utc::now().to_rfc3339(),
                "level": level.as_str(),
                "logger": self.name,
                "message": message,
            })
            .to_string(),
        }
    }
}
