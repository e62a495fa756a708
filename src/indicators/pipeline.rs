//! Indicator pipeline: computes every column over a series and keeps only
//! the bars where all of them are defined.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::trend::ema;
use crate::indicators::volatility::bollinger;
use crate::models::indicators::{Candle, IndicatorRow, IndicatorSet};

/// Compute the indicator set for `candles`, dropping warm-up bars.
///
/// Fails on non-finite closes instead of letting NaN leak into the rows.
pub fn compute_indicator_set(candles: &[Candle]) -> Result<IndicatorSet, IndicatorError> {
    if let Some((index, candle)) = candles
        .iter()
        .enumerate()
        .find(|(_, c)| !c.close.is_finite())
    {
        return Err(IndicatorError::NonFiniteInput {
            index,
            value: candle.close,
        });
    }

    let (ema_fast, ema_slow) = ema::calculate_ema_pair(candles);
    let macd_line = macd::calculate_macd_default(candles);
    let rsi_values = rsi::calculate_rsi_default(candles);
    let bands = bollinger::calculate_bollinger_bands_default(candles);

    let expected = candles.len();
    for column in [
        &ema_fast,
        &ema_slow,
        &macd_line,
        &rsi_values,
        &bands.upper,
        &bands.lower,
    ] {
        if column.len() != expected {
            return Err(IndicatorError::LengthMismatch {
                expected,
                actual: column.len(),
            });
        }
    }

    let rows = candles
        .iter()
        .enumerate()
        .filter_map(|(i, candle)| {
            Some(IndicatorRow {
                timestamp: candle.timestamp,
                close: candle.close,
                ema_fast: ema_fast[i]?,
                ema_slow: ema_slow[i]?,
                macd: macd_line[i]?,
                rsi: rsi_values[i]?,
                bollinger_upper: bands.upper[i]?,
                bollinger_lower: bands.lower[i]?,
            })
        })
        .collect();

    Ok(IndicatorSet::new(rows))
}
