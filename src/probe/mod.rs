//! External network probes
//!
//! Each probe invokes a system network utility, waits for it to exit, and
//! parses the numeric metrics out of its textual output. A probe failure is
//! diagnostic information, not a fatal condition: the runner logs the reason
//! and records a null metric, and the survey continues.

pub mod latency;
pub mod throughput;

pub use latency::PingProber;
pub use throughput::NetworkQualityProber;

use crate::models::ThroughputReading;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single probe invocation.
///
/// "Tool not installed" and "tool ran but printed something unexpected" are
/// deliberately not distinguished beyond the variant: both end up logged and
/// recorded as a null metric.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The external tool could not be started at all
    #[error("failed to invoke {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully
    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
    },

    /// Expected content was absent from the tool's output
    #[error("{tool} output is missing {what}")]
    MissingField {
        tool: &'static str,
        what: &'static str,
    },

    /// Expected content was present but not parseable
    #[error("could not parse {what} from {tool} output: {detail}")]
    Malformed {
        tool: &'static str,
        what: &'static str,
        detail: String,
    },
}

/// Probes round-trip latency to a local address
#[async_trait]
pub trait LatencyProber: Send + Sync {
    /// Run one probe and return the average round-trip time in milliseconds
    async fn measure(&self) -> Result<f64, ProbeError>;
}

/// Probes internet throughput capacity
#[async_trait]
pub trait ThroughputProber: Send + Sync {
    /// Run one probe and return whichever capacities the tool reported
    async fn measure(&self) -> Result<ThroughputReading, ProbeError>;
}
