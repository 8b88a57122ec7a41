use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod metrics;
mod scenarios;
mod transactions;

use cli::{Cli, Mode};
use config::DEFAULT_SCENARIO;
use metrics::reporter;
use scenarios::runner::{self, RunOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.mode {
        Mode::List(args) => {
            let catalog = config::load_catalog(args.config.as_deref())?;
            reporter::print_catalog(&catalog, DEFAULT_SCENARIO);
        }

        Mode::Plan(args) => {
            let catalog = config::load_catalog(args.config.as_deref())?;
            let profile = catalog.get(&args.scenario)?;
            if !profile.executor.is_monotonic_ramp_up() {
                tracing::warn!(
                    "Scenario '{}' drops its target before the final ramp down",
                    args.scenario
                );
            }
            reporter::print_plan(&args.scenario, profile);
        }

        Mode::Run(args) => {
            let catalog = config::load_catalog(args.select.config.as_deref())?;
            let profile = catalog.get(&args.select.scenario)?;

            tracing::info!("HTTP Load Test Starting...");
            tracing::info!("Host: {}", args.host);
            tracing::info!("Path: {}", transactions::TARGET_PATH);
            tracing::info!("Scenario: {}", args.select.scenario);
            tracing::info!("  Executor: {}", profile.executor.kind());
            tracing::info!("  Exec: {}", profile.exec);
            tracing::info!("  Peak VUs: {}", profile.executor.peak_vus());
            tracing::info!(
                "  Duration: {}s",
                profile.executor.total_duration().as_secs()
            );

            let options = RunOptions {
                host: args.host,
                report_file: args.report_file,
                monitor_interval: args.monitor_interval,
            };
            runner::run(&args.select.scenario, profile, &options).await?;
        }
    }

    Ok(())
}
