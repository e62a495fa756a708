//! Continuous mode: repeat cycles with a fixed pause while the session runs.

use crate::core::runtime::SignalRuntime;
use crate::core::session::RunSession;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

pub struct CycleScheduler {
    interval: Duration,
}

impl CycleScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run cycles until `session` is stopped and return how many completed.
    ///
    /// The flag is only checked between cycles; a running cycle always
    /// finishes.
    pub async fn run(&self, runtime: &SignalRuntime, session: &RunSession) -> u64 {
        let mut cycles = 0;
        info!(
            interval_secs = self.interval.as_secs(),
            "CycleScheduler: continuous analysis started"
        );

        while session.is_running() {
            runtime.run_cycle().await;
            cycles += 1;

            if !session.is_running() {
                break;
            }
            info!(
                cycles = cycles,
                "CycleScheduler: next cycle in {}s",
                self.interval.as_secs()
            );
            sleep(self.interval).await;
        }

        info!(cycles = cycles, "CycleScheduler: continuous analysis stopped");
        cycles
    }
}
