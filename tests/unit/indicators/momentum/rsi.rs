//! Unit tests for RSI indicator

use alpha_signals::indicators::momentum::{calculate_rsi, calculate_rsi_default};

use crate::fixtures::{assert_close, candles_from_closes, steady_uptrend};

#[test]
fn test_rsi_warm_up() {
    let candles = candles_from_closes(&steady_uptrend(20));
    let rsi = calculate_rsi_default(&candles);
    assert_eq!(rsi.iter().position(|v| v.is_some()), Some(13));
}

#[test]
fn test_rsi_without_losses_is_100() {
    let candles = candles_from_closes(&steady_uptrend(20));
    let rsi = calculate_rsi_default(&candles);
    assert_close(rsi[19].unwrap(), 100.0);
}

#[test]
fn test_rsi_without_gains_is_0() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let rsi = calculate_rsi_default(&candles_from_closes(&closes));
    assert_close(rsi[19].unwrap(), 0.0);
}

#[test]
fn test_rsi_wilder_smoothing() {
    let closes = [
        1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0, 3.0, 4.0, 5.0, 4.0, 5.0, 6.0, 5.0, 6.0,
    ];
    let rsi = calculate_rsi(&candles_from_closes(&closes), 14);

    assert!((rsi[13].unwrap() - 70.57069761528194).abs() < 1e-9);
    assert!((rsi[14].unwrap() - 62.76360487013936).abs() < 1e-9);
    assert!((rsi[15].unwrap() - 66.72760511882998).abs() < 1e-9);
}

#[test]
fn test_rsi_bounded() {
    let closes = crate::fixtures::selloff_then_bounce();
    let rsi = calculate_rsi_default(&candles_from_closes(&closes));
    assert!(rsi.iter().flatten().all(|v| (0.0..=100.0).contains(v)));
}
