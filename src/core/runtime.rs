//! Cycle orchestrator: one sequential pass over the instrument catalog.

use crate::config::{Config, RunConfig};
use crate::models::instrument::{catalog, InstrumentGroup};
use crate::models::signal::Signal;
use crate::services::fetcher::SeriesFetcher;
use crate::services::notifier::notifier_from_config;
use crate::services::yahoo::YahooMarketDataProvider;
use crate::signals::evaluator::SignalEvaluator;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info};

/// Outcome of one cycle, for logging and inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    pub instruments: usize,
    pub fetched: usize,
    pub signals: Vec<Signal>,
}

pub struct SignalRuntime {
    config: RunConfig,
    catalog: Vec<InstrumentGroup>,
    fetcher: SeriesFetcher,
    evaluator: SignalEvaluator,
}

impl SignalRuntime {
    /// Create a runtime over the default catalog
    pub fn new(config: RunConfig, fetcher: SeriesFetcher, evaluator: SignalEvaluator) -> Self {
        Self {
            config,
            catalog: catalog(),
            fetcher,
            evaluator,
        }
    }

    /// Wire the production collaborators: Yahoo market data and the
    /// configured notifier.
    pub fn from_config(config: &Config) -> Self {
        let provider = Arc::new(YahooMarketDataProvider::new(config.yahoo_base_url.clone()));
        let notifier = notifier_from_config(&config.telegram);
        Self::new(
            config.run.clone(),
            SeriesFetcher::new(provider),
            SignalEvaluator::new(notifier),
        )
    }

    /// Replace the instrument catalog
    pub fn with_catalog(mut self, catalog: Vec<InstrumentGroup>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fetch, evaluate and notify for every instrument, one at a time.
    ///
    /// A failing instrument is skipped; the rest of the cycle continues.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut report = CycleReport::default();
        info!(
            timeframe = %self.config.timeframe,
            groups = self.catalog.len(),
            "SignalRuntime: starting analysis cycle"
        );

        for group in &self.catalog {
            info!(market = %group.name, "SignalRuntime: analyzing market {}", group.name);

            for instrument in group.instruments() {
                report.instruments += 1;

                if let Some(candles) = self
                    .fetcher
                    .fetch(&instrument.symbol, &self.config.timeframe)
                    .await
                {
                    report.fetched += 1;
                    let signal = self
                        .evaluator
                        .evaluate(
                            &candles,
                            &instrument.symbol,
                            &instrument.group,
                            self.config.stop_dev,
                            self.config.take_dev,
                        )
                        .await;

                    match signal {
                        Some(signal) => {
                            info!(
                                symbol = %signal.instrument,
                                market = %signal.market,
                                direction = ?signal.direction,
                                entry = signal.entry,
                                stop_loss = signal.stop_loss,
                                take_profit = signal.take_profit,
                                "SignalRuntime: signal generated: {}",
                                signal.message
                            );
                            report.signals.push(signal);
                        }
                        None => {
                            debug!(symbol = %instrument.symbol, "SignalRuntime: no signal for {}", instrument.symbol);
                        }
                    }
                }

                if !self.config.instrument_delay.is_zero() {
                    sleep(self.config.instrument_delay).await;
                }
            }
        }

        info!(
            instruments = report.instruments,
            fetched = report.fetched,
            signals = report.signals.len(),
            "SignalRuntime: analysis cycle complete"
        );
        report
    }
}
