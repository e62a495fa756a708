//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::Candle;

pub const BOLLINGER_PERIOD: u32 = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Per-bar band values, aligned with the input candles.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn calculate_bollinger_bands(candles: &[Candle], period: u32, std_dev: f64) -> BollingerBands {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma_series(&closes, period as usize);
    let std = math::std_series(&closes, period as usize);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(std.iter())
            .map(|(m, s)| match (m, s) {
                (Some(m), Some(s)) => Some(m + sign * std_dev * s),
                _ => None,
            })
            .collect()
    };

    BollingerBands {
        upper: band(1.0),
        lower: band(-1.0),
        middle,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> BollingerBands {
    calculate_bollinger_bands(candles, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
