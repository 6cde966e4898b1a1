//! Internet throughput probe backed by the `networkquality` utility

use crate::models::ThroughputReading;
use crate::probe::{ProbeError, ThroughputProber};
use async_trait::async_trait;
use tokio::process::Command;

const TOOL: &str = "networkquality";

const DOWNLINK_LABEL: &str = "Downlink capacity";
const UPLINK_LABEL: &str = "Uplink capacity";

/// Throughput prober that shells out to `networkquality`
///
/// The tool takes no arguments; its line-oriented report is scanned for the
/// labelled downlink and uplink capacity fields.
#[derive(Debug, Clone, Default)]
pub struct NetworkQualityProber;

impl NetworkQualityProber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThroughputProber for NetworkQualityProber {
    async fn measure(&self) -> Result<ThroughputReading, ProbeError> {
        let output = Command::new(TOOL)
            .output()
            .await
            .map_err(|source| ProbeError::Spawn { tool: TOOL, source })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                tool: TOOL,
                status: output.status,
            });
        }

        Ok(parse_capacity(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Scan networkquality output for the two capacity fields.
///
/// A label that never appears, or whose value does not parse, leaves its
/// field empty; the two directions never mask each other.
pub fn parse_capacity(output: &str) -> ThroughputReading {
    let mut reading = ThroughputReading::empty();

    for line in output.lines() {
        if line.contains(DOWNLINK_LABEL) {
            reading.download_mbps = parse_capacity_value(line);
        } else if line.contains(UPLINK_LABEL) {
            reading.upload_mbps = parse_capacity_value(line);
        }
    }

    reading
}

/// Take the numeric value between the colon and the unit token.
///
/// `"Downlink capacity: 87.300 Mbps"` yields `87.3`.
fn parse_capacity_value(line: &str) -> Option<f64> {
    line.split_once(':')?
        .1
        .trim()
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}
