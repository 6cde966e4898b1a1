//! Survey run loop
//!
//! One run is: print progress, probe latency, probe throughput, print the
//! metrics, append one sample. Runs execute strictly in sequence with a
//! fixed delay in between, and the CSV export happens exactly once after
//! the final run. A probe failure degrades to a null metric at the point
//! the sample is recorded; a store failure aborts the survey.

use crate::{
    config::Config,
    error::Result,
    export::export_csv,
    logging::Logger,
    models::ThroughputReading,
    output::RunPrinter,
    probe::{LatencyProber, NetworkQualityProber, PingProber, ThroughputProber},
    store::SampleStore,
};

/// Outcome of a completed survey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Measurement iterations performed
    pub runs_completed: u32,
    /// Rows in the CSV export (pre-existing and new)
    pub rows_exported: usize,
}

/// Executes the measurement loop against a store
pub struct Runner<'a> {
    config: &'a Config,
    store: &'a SampleStore,
    latency: Box<dyn LatencyProber>,
    throughput: Box<dyn ThroughputProber>,
    logger: Logger,
    printer: RunPrinter,
}

impl<'a> Runner<'a> {
    /// Create a runner with the standard system probes
    pub fn new(config: &'a Config, store: &'a SampleStore) -> Self {
        Self::with_probers(
            config,
            store,
            Box::new(PingProber::new(config.target.clone())),
            Box::new(NetworkQualityProber::new()),
        )
    }

    /// Create a runner with custom probes (scripted in tests)
    pub fn with_probers(
        config: &'a Config,
        store: &'a SampleStore,
        latency: Box<dyn LatencyProber>,
        throughput: Box<dyn ThroughputProber>,
    ) -> Self {
        Self {
            config,
            store,
            latency,
            throughput,
            logger: Logger::from_config(config),
            printer: RunPrinter::new(config.enable_color),
        }
    }

    /// Run the full survey: all measurement iterations, then one export.
    ///
    /// With `runs = 0` no measurements happen but the export still covers
    /// whatever the table already holds.
    pub async fn run(&self) -> Result<RunSummary> {
        for run in 1..=self.config.runs {
            self.printer.run_header(run, self.config.runs, &self.config.room);

            let latency_ms = match self.latency.measure().await {
                Ok(ms) => Some(ms),
                Err(e) => {
                    self.logger.warn(&format!("latency probe failed: {}", e));
                    None
                }
            };

            let throughput = match self.throughput.measure().await {
                Ok(reading) => reading,
                Err(e) => {
                    self.logger.warn(&format!("throughput probe failed: {}", e));
                    ThroughputReading::empty()
                }
            };

            self.printer.metrics(latency_ms, &throughput);

            let sample = self
                .store
                .append(&self.config.room, latency_ms, throughput)
                .await?;
            self.logger
                .debug(&format!("recorded sample {} at {}", sample.id, sample.timestamp));

            if run < self.config.runs {
                tokio::time::sleep(self.config.wait).await;
            }
        }

        let rows_exported = export_csv(self.store, &self.config.csv_path).await?;
        self.logger.info(&format!(
            "exported {} rows to {}",
            rows_exported,
            self.config.csv_path.display()
        ));

        Ok(RunSummary {
            runs_completed: self.config.runs,
            rows_exported,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Latency prober that replays a scripted sequence of outcomes
    struct ScriptedLatency {
        outcomes: Mutex<VecDeque<std::result::Result<f64, ProbeError>>>,
    }

    impl ScriptedLatency {
        fn new(outcomes: Vec<std::result::Result<f64, ProbeError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl LatencyProber for ScriptedLatency {
        async fn measure(&self) -> std::result::Result<f64, ProbeError> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("latency probe invoked more times than scripted")
        }
    }

    /// Throughput prober that replays a scripted sequence of outcomes
    struct ScriptedThroughput {
        outcomes: Mutex<VecDeque<std::result::Result<ThroughputReading, ProbeError>>>,
    }

    impl ScriptedThroughput {
        fn new(outcomes: Vec<std::result::Result<ThroughputReading, ProbeError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl ThroughputProber for ScriptedThroughput {
        async fn measure(&self) -> std::result::Result<ThroughputReading, ProbeError> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("throughput probe invoked more times than scripted")
        }
    }

    fn test_config(csv_dir: &Path, runs: u32) -> Config {
        Config {
            room: "Lab".to_string(),
            runs,
            wait: Duration::ZERO,
            target: "192.168.1.254".to_string(),
            database_path: csv_dir.join("survey.db"),
            csv_path: csv_dir.join("survey.csv"),
            enable_color: false,
            verbose: false,
            debug: false,
        }
    }

    fn failed_probe() -> ProbeError {
        ProbeError::MissingField {
            tool: "ping",
            what: "rtt summary line",
        }
    }

    #[tokio::test]
    async fn test_three_runs_record_three_samples() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 3);
        let store = SampleStore::open_in_memory().await.unwrap();

        let runner = Runner::with_probers(
            &config,
            &store,
            Box::new(ScriptedLatency::new(vec![Ok(3.1), Ok(3.2), Ok(3.3)])),
            Box::new(ScriptedThroughput::new(vec![
                Ok(ThroughputReading::new(80.0, 10.0)),
                Ok(ThroughputReading::new(81.0, 11.0)),
                Ok(ThroughputReading::new(82.0, 12.0)),
            ])),
        );

        let summary = runner.run().await.unwrap();
        assert_eq!(summary.runs_completed, 3);
        assert_eq!(summary.rows_exported, 3);

        let samples = store.fetch_all().await.unwrap();
        assert_eq!(samples.len(), 3);
        for pair in samples.windows(2) {
            assert!(pair[0].id < pair[1].id);
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        for sample in &samples {
            assert_eq!(sample.room, "Lab");
        }
        assert_eq!(samples[0].local_latency_ms, Some(3.1));
        assert_eq!(samples[2].internet_download_mbps, Some(82.0));

        assert!(config.csv_path.exists());
    }

    #[tokio::test]
    async fn test_latency_failure_does_not_block_throughput() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 1);
        let store = SampleStore::open_in_memory().await.unwrap();

        let runner = Runner::with_probers(
            &config,
            &store,
            Box::new(ScriptedLatency::new(vec![Err(failed_probe())])),
            Box::new(ScriptedThroughput::new(vec![Ok(ThroughputReading::new(
                87.3, 12.1,
            ))])),
        );

        runner.run().await.unwrap();

        let samples = store.fetch_all().await.unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].local_latency_ms, None);
        assert_eq!(samples[0].internet_download_mbps, Some(87.3));
        assert_eq!(samples[0].internet_upload_mbps, Some(12.1));
    }

    #[tokio::test]
    async fn test_throughput_failure_records_empty_reading() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 1);
        let store = SampleStore::open_in_memory().await.unwrap();

        let runner = Runner::with_probers(
            &config,
            &store,
            Box::new(ScriptedLatency::new(vec![Ok(2.5)])),
            Box::new(ScriptedThroughput::new(vec![Err(ProbeError::MissingField {
                tool: "networkquality",
                what: "capacity lines",
            })])),
        );

        runner.run().await.unwrap();

        let samples = store.fetch_all().await.unwrap();
        assert_eq!(samples[0].local_latency_ms, Some(2.5));
        assert_eq!(samples[0].internet_download_mbps, None);
        assert_eq!(samples[0].internet_upload_mbps, None);
    }

    #[tokio::test]
    async fn test_zero_runs_still_exports_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 0);
        let store = SampleStore::open_in_memory().await.unwrap();

        // Pre-existing data from an earlier survey
        store
            .append("Kitchen", Some(4.2), ThroughputReading::empty())
            .await
            .unwrap();

        let runner = Runner::with_probers(
            &config,
            &store,
            Box::new(ScriptedLatency::new(vec![])),
            Box::new(ScriptedThroughput::new(vec![])),
        );

        let summary = runner.run().await.unwrap();
        assert_eq!(summary.runs_completed, 0);
        assert_eq!(summary.rows_exported, 1);
        assert_eq!(store.count().await.unwrap(), 1);

        let csv = std::fs::read_to_string(&config.csv_path).unwrap();
        assert!(csv.contains("Kitchen"));
    }

    #[tokio::test]
    async fn test_export_covers_old_and_new_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), 1);
        let store = SampleStore::open_in_memory().await.unwrap();

        store
            .append("Kitchen", Some(4.2), ThroughputReading::empty())
            .await
            .unwrap();

        let runner = Runner::with_probers(
            &config,
            &store,
            Box::new(ScriptedLatency::new(vec![Ok(3.0)])),
            Box::new(ScriptedThroughput::new(vec![Ok(ThroughputReading::new(
                50.0, 5.0,
            ))])),
        );

        let summary = runner.run().await.unwrap();
        assert_eq!(summary.rows_exported, 2);

        let csv = std::fs::read_to_string(&config.csv_path).unwrap();
        assert!(csv.contains("Kitchen"));
        assert!(csv.contains("Lab"));
    }
}
