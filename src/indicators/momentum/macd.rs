//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::Candle;

pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;

/// Calculate the MACD line for every bar.
///
/// MACD = EMA(fast) - EMA(slow), undefined until the slow EMA is.
pub fn calculate_macd(candles: &[Candle], fast_period: u32, slow_period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::ema_series(&closes, fast_period as usize);
    let slow = math::ema_series(&closes, slow_period as usize);
    math::subtract(&fast, &slow)
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_default(candles: &[Candle]) -> Vec<Option<f64>> {
    calculate_macd(candles, MACD_FAST_PERIOD, MACD_SLOW_PERIOD)
}
