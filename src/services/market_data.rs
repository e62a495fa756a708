//! Market data provider interface.

use crate::models::indicators::RawCandle;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("provider error: {0}")]
    Upstream(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical bars for a symbol.
    ///
    /// `timeframe` is the bar size ("15m", "1d", ...) and `lookback` the
    /// history window ("60d", "2y"). Bars may carry missing fields.
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        lookback: &str,
    ) -> Result<Vec<RawCandle>, MarketDataError>;
}

/// Serves preloaded bars keyed by symbol; unknown symbols yield no bars.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<String, Vec<RawCandle>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, candles: Vec<RawCandle>) -> Self {
        self.series.insert(symbol.to_string(), candles);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        _timeframe: &str,
        _lookback: &str,
    ) -> Result<Vec<RawCandle>, MarketDataError> {
        Ok(self.series.get(symbol).cloned().unwrap_or_default())
    }
}
