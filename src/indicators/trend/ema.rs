//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

pub const EMA_FAST_PERIOD: u32 = 9;
pub const EMA_SLOW_PERIOD: u32 = 21;

/// Calculate the EMA of closes for every bar.
///
/// Seeded with the first close; the first `period - 1` bars are undefined.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period as usize)
}

/// Fast (9) and slow (21) EMAs.
pub fn calculate_ema_pair(candles: &[Candle]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    (
        calculate_ema(candles, EMA_FAST_PERIOD),
        calculate_ema(candles, EMA_SLOW_PERIOD),
    )
}
