//! Local latency probe backed by the system `ping` utility

use crate::probe::{LatencyProber, ProbeError};
use async_trait::async_trait;
use tokio::process::Command;

const TOOL: &str = "ping";

/// Latency prober that shells out to `ping`
///
/// Sends a fixed small burst of packets to the configured target and reads
/// the average round-trip time out of the summary line.
#[derive(Debug, Clone)]
pub struct PingProber {
    target: String,
    count: u32,
}

impl PingProber {
    /// Create a prober for the given target address
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            count: crate::defaults::PING_COUNT,
        }
    }

    /// Override the number of packets sent per probe
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// The probed address
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait]
impl LatencyProber for PingProber {
    async fn measure(&self) -> Result<f64, ProbeError> {
        let output = Command::new(TOOL)
            .arg("-c")
            .arg(self.count.to_string())
            .arg(&self.target)
            .output()
            .await
            .map_err(|source| ProbeError::Spawn { tool: TOOL, source })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                tool: TOOL,
                status: output.status,
            });
        }

        parse_average_latency(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract the average round-trip time in milliseconds from ping output.
///
/// Accepts both summary dialects:
/// iputils prints `rtt min/avg/max/mdev = 1.2/3.4/5.6/0.7 ms`, BSD and macOS
/// print `round-trip min/avg/max/stddev = ...`. The average is the second
/// value of the slash-separated quadruple after the `=` sign.
pub fn parse_average_latency(output: &str) -> Result<f64, ProbeError> {
    let summary = output
        .lines()
        .find(|line| line.contains("round-trip") || line.contains("rtt"))
        .ok_or(ProbeError::MissingField {
            tool: TOOL,
            what: "rtt summary line",
        })?;

    let stats = summary.split('=').nth(1).ok_or(ProbeError::Malformed {
        tool: TOOL,
        what: "rtt summary line",
        detail: summary.to_string(),
    })?;

    let avg = stats
        .trim()
        .split('/')
        .nth(1)
        .ok_or(ProbeError::Malformed {
            tool: TOOL,
            what: "rtt quadruple",
            detail: stats.trim().to_string(),
        })?;

    avg.trim().parse::<f64>().map_err(|e| ProbeError::Malformed {
        tool: TOOL,
        what: "average rtt value",
        detail: format!("{:?}: {}", avg, e),
    })
}
