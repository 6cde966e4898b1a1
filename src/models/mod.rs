//! Data models for measurement samples

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single throughput probe reading.
///
/// The two directions are independently optional: the probe reports whichever
/// capacities its output actually contained, and a missing downlink value
/// never blanks a present uplink value (or vice versa).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThroughputReading {
    /// Internet download capacity in Mbps
    pub download_mbps: Option<f64>,

    /// Internet upload capacity in Mbps
    pub upload_mbps: Option<f64>,
}

impl ThroughputReading {
    /// Create a reading with both directions present
    pub fn new(download_mbps: f64, upload_mbps: f64) -> Self {
        Self {
            download_mbps: Some(download_mbps),
            upload_mbps: Some(upload_mbps),
        }
    }

    /// A reading with neither direction measured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether both capacities were measured
    pub fn is_complete(&self) -> bool {
        self.download_mbps.is_some() && self.upload_mbps.is_some()
    }
}

/// One recorded measurement event.
///
/// Samples are append-only: the store assigns `id` and `timestamp` at insert
/// time and rows are never updated or deleted afterwards. Any of the three
/// metric fields may be null when its probe failed; the nulls are recorded
/// permanently, not retried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sample {
    /// Store-assigned identifier, unique and monotonically increasing
    pub id: i64,

    /// Insert time (not probe start time), UTC
    pub timestamp: DateTime<Utc>,

    /// Free-text location label supplied by the caller
    pub room: String,

    /// Average round-trip time to the local gateway in milliseconds
    pub local_latency_ms: Option<f64>,

    /// Internet download capacity in Mbps
    pub internet_download_mbps: Option<f64>,

    /// Internet upload capacity in Mbps
    pub internet_upload_mbps: Option<f64>,
}

impl Sample {
    /// Check whether every metric of this sample was measured
    pub fn is_complete(&self) -> bool {
        self.local_latency_ms.is_some()
            && self.internet_download_mbps.is_some()
            && self.internet_upload_mbps.is_some()
    }

    /// The throughput portion of this sample
    pub fn throughput(&self) -> ThroughputReading {
        ThroughputReading {
            download_mbps: self.internet_download_mbps,
            upload_mbps: self.internet_upload_mbps,
        }
    }
}
