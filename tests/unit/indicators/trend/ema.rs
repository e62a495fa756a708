//! Unit tests for EMA indicator

use alpha_signals::indicators::trend::{calculate_ema, calculate_ema_pair};

use crate::fixtures::{assert_close, candles_from_closes, steady_uptrend};

#[test]
fn test_ema_insufficient_data() {
    let candles = candles_from_closes(&steady_uptrend(10));
    assert!(calculate_ema(&candles, 20).iter().all(|v| v.is_none()));
}

#[test]
fn test_ema_warm_up_length() {
    let candles = candles_from_closes(&steady_uptrend(30));
    let (fast, slow) = calculate_ema_pair(&candles);

    assert_eq!(fast.len(), 30);
    assert_eq!(fast.iter().position(|v| v.is_some()), Some(8));
    assert_eq!(slow.iter().position(|v| v.is_some()), Some(20));
}

#[test]
fn test_ema_of_constant_series() {
    let candles = candles_from_closes(&[50.0; 15]);
    let ema = calculate_ema(&candles, 9);
    assert_close(ema[14].unwrap(), 50.0);
}

#[test]
fn test_ema_lags_rising_prices() {
    let closes = steady_uptrend(30);
    let candles = candles_from_closes(&closes);
    let ema = calculate_ema(&candles, 9);
    assert!(ema[29].unwrap() < closes[29]);
}
