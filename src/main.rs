//! Runs a single analysis cycle over the catalog and exits.

use alpha_signals::config::{get_environment, Config};
use alpha_signals::core::runtime::SignalRuntime;
use alpha_signals::logging;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(environment = %get_environment(), "Starting manual analysis");
    info!(
        timeframe = %config.run.timeframe,
        stop_dev = config.run.stop_dev,
        take_dev = config.run.take_dev,
        "Run configuration"
    );

    let runtime = SignalRuntime::from_config(&config);
    let report = runtime.run_cycle().await;

    info!(
        instruments = report.instruments,
        signals = report.signals.len(),
        "Manual analysis finished"
    );
    for signal in &report.signals {
        println!("{}", serde_json::to_string(signal)?);
    }

    Ok(())
}
