//! Series fetcher: turns provider output into a clean price series.

use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataProvider;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const INTRADAY_LOOKBACK: &str = "60d";
pub const DEFAULT_LOOKBACK: &str = "2y";

/// History window to request for a timeframe code.
///
/// Sub-hour minute bars are only kept for a short window upstream, so they
/// get a 60-day lookback. Hourly and coarser codes, including `60m`/`90m`,
/// get two years.
pub fn lookback_for(timeframe: &str) -> &'static str {
    let minutes = timeframe
        .trim()
        .strip_suffix('m')
        .and_then(|n| n.parse::<u32>().ok());
    match minutes {
        Some(m) if m < 60 => INTRADAY_LOOKBACK,
        _ => DEFAULT_LOOKBACK,
    }
}

pub struct SeriesFetcher {
    provider: Arc<dyn MarketDataProvider>,
}

impl SeriesFetcher {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch a chronological series, or `None` when nothing usable came back.
    ///
    /// Rows with any missing value are dropped. Provider errors are logged,
    /// never returned.
    pub async fn fetch(&self, symbol: &str, timeframe: &str) -> Option<Vec<Candle>> {
        let lookback = lookback_for(timeframe);
        info!(
            symbol = %symbol,
            timeframe = %timeframe,
            lookback = %lookback,
            "SeriesFetcher: fetching data for {} ({})",
            symbol,
            timeframe
        );

        let raw = match self.provider.get_candles(symbol, timeframe, lookback).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    symbol = %symbol,
                    error = %e,
                    "SeriesFetcher: failed to fetch data for {}: {}",
                    symbol,
                    e
                );
                return None;
            }
        };

        if raw.is_empty() {
            warn!(
                symbol = %symbol,
                timeframe = %timeframe,
                "SeriesFetcher: no data returned for {} ({})",
                symbol,
                timeframe
            );
            return None;
        }

        let total = raw.len();
        let mut candles: Vec<Candle> = raw.iter().filter_map(|c| c.complete()).collect();
        candles.sort_by_key(|c| c.timestamp);
        candles.dedup_by_key(|c| c.timestamp);

        if candles.len() < total {
            debug!(
                symbol = %symbol,
                dropped = total - candles.len(),
                "SeriesFetcher: dropped {} incomplete rows for {}",
                total - candles.len(),
                symbol
            );
        }

        if candles.is_empty() {
            warn!(
                symbol = %symbol,
                "SeriesFetcher: every row for {} had missing values",
                symbol
            );
            return None;
        }

        Some(candles)
    }
}
