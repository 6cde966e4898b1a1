//! WiFi Survey - Main CLI Application
//!
//! Measures local gateway latency and internet throughput per room using
//! system network utilities, records every sample in a SQLite database, and
//! exports the accumulated results to CSV.

use clap::Parser;
use std::error::Error;
use std::process;
use wifi_survey::{
    cli::Cli,
    config::{display_config_summary, load_config},
    error::Result,
    output::RunPrinter,
    runner::Runner,
    store::SampleStore,
    PKG_NAME, VERSION,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let use_color = cli.use_colors();

    if let Err(e) = run_application(cli).await {
        eprintln!("{}", e.format_for_console(use_color));

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    let config = load_config(cli)?;

    if config.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!(
            "Build: {} ({})",
            env!("BUILD_TIME"),
            option_env!("GIT_COMMIT").unwrap_or("unknown")
        );
        println!();
        println!("Configuration loaded successfully:");
        println!("{}", display_config_summary(&config));
        println!();
    }

    let store = SampleStore::open(&config.database_path).await?;

    let runner = Runner::new(&config, &store);
    let summary = runner.run().await?;

    let printer = RunPrinter::new(config.enable_color);
    printer.summary(summary.rows_exported, &config.database_path, &config.csv_path);

    store.close().await;
    Ok(())
}
