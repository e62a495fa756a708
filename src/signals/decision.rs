//! Threshold decision rule and exit levels.

use crate::models::indicators::IndicatorRow;
use crate::models::signal::SignalDirection;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Direction for a single bar. Strict comparisons; ties are neutral.
pub fn decide_direction(close: f64, ema_fast: f64, rsi: f64) -> SignalDirection {
    if close > ema_fast && rsi < RSI_OVERSOLD {
        SignalDirection::Buy
    } else if close < ema_fast && rsi > RSI_OVERBOUGHT {
        SignalDirection::Sell
    } else {
        SignalDirection::Neutral
    }
}

pub fn decide(row: &IndicatorRow) -> SignalDirection {
    decide_direction(row.close, row.ema_fast, row.rsi)
}

/// Stop-loss and take-profit prices around an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopLossTakeProfit {
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl StopLossTakeProfit {
    /// Levels for `direction`, or `None` for a neutral read.
    ///
    /// The sell target is placed `stop_dev` below entry; `take_dev` only
    /// applies to buys.
    pub fn for_direction(
        direction: SignalDirection,
        entry: f64,
        stop_dev: f64,
        take_dev: f64,
    ) -> Option<Self> {
        match direction {
            SignalDirection::Buy => Some(Self {
                stop_loss: entry * (1.0 - stop_dev),
                take_profit: entry * (1.0 + take_dev),
            }),
            SignalDirection::Sell => Some(Self {
                stop_loss: entry * (1.0 + stop_dev),
                // TODO: confirm with the signal consumers whether sell targets should use take_dev
                take_profit: entry * (1.0 - stop_dev),
            }),
            SignalDirection::Neutral => None,
        }
    }
}

pub fn format_message(
    instrument: &str,
    market: &str,
    direction: SignalDirection,
    entry: f64,
) -> String {
    format!(
        "Signal for {} ({}): {} @ {:.4}",
        instrument, market, direction, entry
    )
}
