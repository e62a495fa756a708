use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar. Only `close` feeds the indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// A bar as delivered by a data provider, where any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    pub timestamp: Option<DateTime<Utc>>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl RawCandle {
    /// Returns the complete bar, or `None` if any field is missing or NaN.
    pub fn complete(&self) -> Option<Candle> {
        let present = |v: Option<f64>| v.filter(|x| !x.is_nan());
        Some(Candle::new(
            present(self.open)?,
            present(self.high)?,
            present(self.low)?,
            present(self.close)?,
            present(self.volume)?,
            self.timestamp?,
        ))
    }
}

impl From<Candle> for RawCandle {
    fn from(candle: Candle) -> Self {
        Self {
            timestamp: Some(candle.timestamp),
            open: Some(candle.open),
            high: Some(candle.high),
            low: Some(candle.low),
            close: Some(candle.close),
            volume: Some(candle.volume),
        }
    }
}

/// Indicator values for one bar, all defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub macd: f64,
    pub rsi: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
}

/// Rows of a series that survived the warm-up drop, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorSet {
    pub fn new(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Most recent fully defined row.
    pub fn last(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }
}
