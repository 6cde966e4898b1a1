//! Embedded SQLite store for measurement samples
//!
//! The store holds a single append-only `samples` table. Rows are inserted
//! one at a time with a store-assigned id and insert-time timestamp, and are
//! never updated or deleted. Store failures are fatal to the process; there
//! is no partial-write recovery.

use crate::error::Result;
use crate::models::{Sample, ThroughputReading};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Sample store backed by a SQLite database file
pub struct SampleStore {
    pool: SqlitePool,
}

impl SampleStore {
    /// Open the database at `path`, creating the file and the schema when
    /// absent. Safe to call on every process start.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        // The survey is strictly sequential; one connection is all it uses.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub async fn open_in_memory() -> Result<Self> {
        // A second pool connection would see a different empty in-memory
        // database, so the pool is pinned to a single connection here too.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Idempotently create the samples table if it is absent
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS samples (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                room TEXT NOT NULL,
                local_latency_ms REAL,
                internet_download_mbps REAL,
                internet_upload_mbps REAL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append one sample row.
    ///
    /// The timestamp is generated here, at insert time, not when the probes
    /// started. The insert is committed before this returns; the stored row
    /// (with its assigned id) is handed back.
    pub async fn append(
        &self,
        room: &str,
        latency_ms: Option<f64>,
        throughput: ThroughputReading,
    ) -> Result<Sample> {
        let timestamp = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO samples (timestamp, room, local_latency_ms, internet_download_mbps, internet_upload_mbps)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(timestamp)
        .bind(room)
        .bind(latency_ms)
        .bind(throughput.download_mbps)
        .bind(throughput.upload_mbps)
        .execute(&self.pool)
        .await?;

        Ok(Sample {
            id: result.last_insert_rowid(),
            timestamp,
            room: room.to_string(),
            local_latency_ms: latency_ms,
            internet_download_mbps: throughput.download_mbps,
            internet_upload_mbps: throughput.upload_mbps,
        })
    }

    /// Fetch every sample in identifier order
    pub async fn fetch_all(&self) -> Result<Vec<Sample>> {
        let samples = sqlx::query_as::<_, Sample>(
            r#"
            SELECT id, timestamp, room, local_latency_ms, internet_download_mbps, internet_upload_mbps
            FROM samples
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(samples)
    }

    /// Get the number of stored samples
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM samples")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Close the database connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
