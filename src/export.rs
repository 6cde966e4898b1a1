//! CSV export of the sample table
//!
//! The export is a full regeneration: every row of the store, in identifier
//! order, overwriting whatever file was at the destination. Fields are
//! quoted per RFC 4180, so a room label containing the delimiter survives a
//! round trip instead of corrupting the record.

use crate::error::Result;
use crate::store::SampleStore;
use std::path::Path;

/// Column names, matching the store schema and the `Sample` field order
const HEADER: [&str; 6] = [
    "id",
    "timestamp",
    "room",
    "local_latency_ms",
    "internet_download_mbps",
    "internet_upload_mbps",
];

/// Write every stored sample to `destination` as CSV.
///
/// The header line is always present, even for an empty table. Returns the
/// number of exported rows.
pub async fn export_csv(store: &SampleStore, destination: &Path) -> Result<usize> {
    let samples = store.fetch_all().await?;

    let mut writer = csv::Writer::from_path(destination)?;
    if samples.is_empty() {
        writer.write_record(HEADER)?;
    }
    for sample in &samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;

    Ok(samples.len())
}
