//! Unit tests for the signal evaluator

use std::sync::Arc;

use alpha_signals::models::signal::SignalDirection;
use alpha_signals::signals::{analyze, SignalError, SignalEvaluator};

use crate::fixtures::{
    assert_close, candles_from_closes, decline_drift_up_then_dip, rally_then_pullback,
    selloff_then_bounce, steady_uptrend, RecordingNotifier,
};

const STOP_DEV: f64 = 0.003;
const TAKE_DEV: f64 = 0.005;

fn evaluator() -> (SignalEvaluator, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (SignalEvaluator::new(notifier.clone()), notifier)
}

#[tokio::test]
async fn test_short_series_yields_no_signal() {
    let (evaluator, notifier) = evaluator();
    let closes = selloff_then_bounce();
    for len in [0, 1, 10, 20] {
        let candles = candles_from_closes(&closes[..len]);
        assert!(evaluator
            .evaluate(&candles, "BTC-USD", "Crypto", STOP_DEV, TAKE_DEV)
            .await
            .is_none());
    }
    assert!(notifier.messages().is_empty());
}

#[test]
fn test_short_series_is_data_unavailable() {
    let candles = candles_from_closes(&steady_uptrend(20));
    let err = analyze(&candles, "BTC-USD", "Crypto", STOP_DEV, TAKE_DEV).unwrap_err();
    assert!(matches!(err, SignalError::DataUnavailable { .. }));
}

#[test]
fn test_no_defined_rows_is_data_unavailable() {
    for len in 21..=25 {
        let mut closes: Vec<f64> = (0..len - 1).map(|i| 100.0 - i as f64).collect();
        closes.push(closes[len - 2] + 4.5);
        let err = analyze(&candles_from_closes(&closes), "BTC-USD", "Crypto", STOP_DEV, TAKE_DEV)
            .unwrap_err();
        assert!(matches!(err, SignalError::DataUnavailable { .. }), "len {len}");
    }
}

#[tokio::test]
async fn test_bounce_after_selloff_is_buy() {
    let (evaluator, notifier) = evaluator();
    let candles = candles_from_closes(&selloff_then_bounce());
    assert_eq!(candles.len(), 30);

    let signal = evaluator
        .evaluate(&candles, "BTC-USD", "Crypto", STOP_DEV, TAKE_DEV)
        .await
        .expect("buy signal");

    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.instrument, "BTC-USD");
    assert_eq!(signal.market, "Crypto");
    assert_eq!(signal.entry, 76.5);
    assert_close(signal.stop_loss, 76.5 * (1.0 - STOP_DEV));
    assert_close(signal.take_profit, 76.5 * (1.0 + TAKE_DEV));
    assert!(signal.stop_loss < signal.entry && signal.entry < signal.take_profit);
    assert_eq!(signal.message, "Signal for BTC-USD (Crypto): Buy @ 76.5000");
    assert_eq!(notifier.messages(), vec![signal.message.clone()]);
}

#[test]
fn test_small_last_bar_dip_can_still_buy() {
    let closes = decline_drift_up_then_dip();
    assert_eq!(closes.len(), 30);
    assert!(closes[29] < closes[28]);

    let signal = analyze(&candles_from_closes(&closes), "ETH-USD", "Crypto", STOP_DEV, TAKE_DEV)
        .unwrap()
        .expect("buy signal");
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_close(signal.entry, closes[29]);
    assert_eq!(signal.message, "Signal for ETH-USD (Crypto): Buy @ 82.6000");
}

#[tokio::test]
async fn test_pullback_after_rally_is_sell() {
    let (evaluator, notifier) = evaluator();
    let candles = candles_from_closes(&rally_then_pullback());

    let signal = evaluator
        .evaluate(&candles, "GC=F", "Commodities", STOP_DEV, TAKE_DEV)
        .await
        .expect("sell signal");

    assert_eq!(signal.direction, SignalDirection::Sell);
    assert_eq!(signal.entry, 123.5);
    assert_close(signal.stop_loss, 123.5 * (1.0 + STOP_DEV));
    assert_close(signal.take_profit, 123.5 * (1.0 - STOP_DEV));
    assert!(signal.take_profit < signal.entry && signal.entry < signal.stop_loss);
    assert!(signal.message.contains("GC=F"));
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_neutral_is_not_materialized_or_notified() {
    let (evaluator, notifier) = evaluator();
    let candles = candles_from_closes(&steady_uptrend(60));

    let result = evaluator
        .try_evaluate(&candles, "AAPL", "Stocks", STOP_DEV, TAKE_DEV)
        .await;

    assert_eq!(result, Ok(None));
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_computation_failure_is_swallowed() {
    let (evaluator, notifier) = evaluator();
    let mut closes = selloff_then_bounce();
    closes[3] = f64::INFINITY;
    let candles = candles_from_closes(&closes);

    let err = analyze(&candles, "SOL-USD", "Crypto", STOP_DEV, TAKE_DEV).unwrap_err();
    assert!(matches!(err, SignalError::ComputationFailure(_)));

    assert!(evaluator
        .evaluate(&candles, "SOL-USD", "Crypto", STOP_DEV, TAKE_DEV)
        .await
        .is_none());
    assert!(notifier.messages().is_empty());
}

#[test]
fn test_evaluation_is_idempotent() {
    let candles = candles_from_closes(&rally_then_pullback());
    let first = analyze(&candles, "ETH-USD", "Crypto", STOP_DEV, TAKE_DEV).unwrap();
    let second = analyze(&candles, "ETH-USD", "Crypto", STOP_DEV, TAKE_DEV).unwrap();

    let (first, second) = (first.unwrap(), second.unwrap());
    assert_eq!(first.entry.to_bits(), second.entry.to_bits());
    assert_eq!(first.stop_loss.to_bits(), second.stop_loss.to_bits());
    assert_eq!(first.take_profit.to_bits(), second.take_profit.to_bits());
    assert_eq!(first, second);
}
