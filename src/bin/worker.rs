//! Alpha Signals Worker
//!
//! Runs analysis cycles continuously, pausing ANALYSIS_INTERVAL_MINUTES
//! between cycles, until Ctrl-C.

use alpha_signals::config::{get_environment, Config};
use alpha_signals::core::runtime::SignalRuntime;
use alpha_signals::core::scheduler::CycleScheduler;
use alpha_signals::core::session::RunSession;
use alpha_signals::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env();
    info!("Starting Alpha Signals Worker");
    info!(environment = %get_environment(), "Environment");
    info!(
        timeframe = %config.run.timeframe,
        interval_secs = config.run.cycle_interval.as_secs(),
        instrument_delay_secs = config.run.instrument_delay.as_secs(),
        "Analysis: every {} minutes",
        config.run.cycle_interval.as_secs() / 60
    );

    if config.run.cycle_interval.is_zero() {
        return Err("ANALYSIS_INTERVAL_MINUTES must be > 0 for worker".into());
    }

    let runtime = SignalRuntime::from_config(&config);
    let scheduler = CycleScheduler::new(config.run.cycle_interval);
    let session = RunSession::new();
    session.start();

    // Ctrl-C drops whatever cycle or pause is in flight.
    tokio::select! {
        cycles = scheduler.run(&runtime, &session) => {
            info!(cycles = cycles, "Worker stopped");
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            session.stop();
        }
    }

    Ok(())
}
