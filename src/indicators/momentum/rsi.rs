//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

pub const RSI_PERIOD: u32 = 14;

/// Calculate RSI for every bar.
///
/// RSI = 100 - (100 / (1 + RS)), RS = smoothed gain / smoothed loss.
/// Gains and losses use Wilder smoothing; the first bar has no prior close
/// and counts as an unchanged bar. A zero smoothed loss yields 100.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Vec<Option<f64>> {
    let mut gains = Vec::with_capacity(candles.len());
    let mut losses = Vec::with_capacity(candles.len());

    for (i, candle) in candles.iter().enumerate() {
        let change = if i == 0 {
            0.0
        } else {
            candle.close - candles[i - 1].close
        };
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gain = math::wilder_series(&gains, period as usize);
    let avg_loss = math::wilder_series(&losses, period as usize);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(gain, loss)| match (gain, loss) {
            (Some(_), Some(loss)) if *loss == 0.0 => Some(100.0),
            (Some(gain), Some(loss)) => Some(100.0 - (100.0 / (1.0 + gain / loss))),
            _ => None,
        })
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Vec<Option<f64>> {
    calculate_rsi(candles, RSI_PERIOD)
}
