//! Signal evaluator: indicators over a series, rule on the last row,
//! notification for every non-neutral result.

use crate::indicators::compute_indicator_set;
use crate::models::indicators::Candle;
use crate::models::signal::Signal;
use crate::services::notifier::Notifier;
use crate::signals::decision::{decide, format_message, StopLossTakeProfit};
use crate::signals::error::SignalError;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Bars required before any indicator is attempted.
pub const MIN_CANDLES: usize = 21;

pub struct SignalEvaluator {
    notifier: Arc<dyn Notifier>,
}

impl SignalEvaluator {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Evaluate a series and return a signal, if any.
    ///
    /// Never fails: insufficient data and computation failures are logged
    /// and reported as no signal.
    pub async fn evaluate(
        &self,
        candles: &[Candle],
        instrument: &str,
        market: &str,
        stop_dev: f64,
        take_dev: f64,
    ) -> Option<Signal> {
        match self
            .try_evaluate(candles, instrument, market, stop_dev, take_dev)
            .await
        {
            Ok(signal) => signal,
            Err(e @ SignalError::DataUnavailable { .. }) => {
                warn!(instrument = %instrument, error = %e, "SignalEvaluator: {}", e);
                None
            }
            Err(e @ SignalError::ComputationFailure(_)) => {
                error!(
                    instrument = %instrument,
                    error = %e,
                    "SignalEvaluator: failed to analyze {}: {}",
                    instrument,
                    e
                );
                None
            }
        }
    }

    /// Same as [`evaluate`](Self::evaluate) but surfaces why no signal was
    /// produced. The notifier is still invoked for non-neutral signals.
    pub async fn try_evaluate(
        &self,
        candles: &[Candle],
        instrument: &str,
        market: &str,
        stop_dev: f64,
        take_dev: f64,
    ) -> Result<Option<Signal>, SignalError> {
        info!(
            instrument = %instrument,
            market = %market,
            "SignalEvaluator: analyzing {} ({})",
            instrument,
            market
        );

        let signal = analyze(candles, instrument, market, stop_dev, take_dev)?;
        if let Some(ref signal) = signal {
            self.notifier.notify(&signal.message).await;
        }
        Ok(signal)
    }
}

/// Pure evaluation without the notification side effect.
pub fn analyze(
    candles: &[Candle],
    instrument: &str,
    market: &str,
    stop_dev: f64,
    take_dev: f64,
) -> Result<Option<Signal>, SignalError> {
    if candles.len() < MIN_CANDLES {
        return Err(SignalError::data_unavailable(
            instrument,
            format!("{} bars < {}", candles.len(), MIN_CANDLES),
        ));
    }

    let indicators = compute_indicator_set(candles)?;
    let last = match indicators.last() {
        Some(row) => row,
        None => {
            return Err(SignalError::data_unavailable(
                instrument,
                "no fully defined bars after indicator warm-up",
            ))
        }
    };

    let direction = decide(last);
    debug!(
        instrument = %instrument,
        close = last.close,
        ema_fast = last.ema_fast,
        rsi = last.rsi,
        direction = ?direction,
        "SignalEvaluator: last row evaluated"
    );

    let entry = last.close;
    let levels = match StopLossTakeProfit::for_direction(direction, entry, stop_dev, take_dev) {
        Some(levels) => levels,
        None => return Ok(None),
    };

    Ok(Some(Signal {
        instrument: instrument.to_string(),
        market: market.to_string(),
        direction,
        entry,
        stop_loss: levels.stop_loss,
        take_profit: levels.take_profit,
        message: format_message(instrument, market, direction, entry),
    }))
}
