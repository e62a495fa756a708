//! Unit tests for the series fetcher

use std::sync::Arc;

use alpha_signals::models::indicators::RawCandle;
use alpha_signals::services::fetcher::{lookback_for, SeriesFetcher};
use alpha_signals::services::market_data::{
    InMemoryMarketDataProvider, MarketDataError, MarketDataProvider,
};

use crate::fixtures::{raw_from_closes, steady_uptrend};

struct FailingProvider;

#[async_trait::async_trait]
impl MarketDataProvider for FailingProvider {
    async fn get_candles(
        &self,
        _symbol: &str,
        _timeframe: &str,
        _lookback: &str,
    ) -> Result<Vec<RawCandle>, MarketDataError> {
        Err(MarketDataError::Upstream("connection reset".to_string()))
    }
}

#[test]
fn test_lookback_policy() {
    assert_eq!(lookback_for("15m"), "60d");
    assert_eq!(lookback_for("30m"), "60d");
    assert_eq!(lookback_for("5m"), "60d");
    assert_eq!(lookback_for("60m"), "2y");
    assert_eq!(lookback_for("90m"), "2y");
    assert_eq!(lookback_for("1h"), "2y");
    assert_eq!(lookback_for("1d"), "2y");
    assert_eq!(lookback_for("1wk"), "2y");
    assert_eq!(lookback_for("1mo"), "2y");
}

#[tokio::test]
async fn test_empty_payload_is_no_data() {
    let provider = InMemoryMarketDataProvider::new().with_series("AAPL", Vec::new());
    let fetcher = SeriesFetcher::new(Arc::new(provider));
    assert!(fetcher.fetch("AAPL", "15m").await.is_none());
    assert!(fetcher.fetch("UNKNOWN", "15m").await.is_none());
}

#[tokio::test]
async fn test_transport_failure_is_no_data() {
    let fetcher = SeriesFetcher::new(Arc::new(FailingProvider));
    assert!(fetcher.fetch("AAPL", "1d").await.is_none());
}

#[tokio::test]
async fn test_rows_with_missing_values_dropped() {
    let mut raw = raw_from_closes(&steady_uptrend(10));
    raw[2].close = None;
    raw[5].volume = None;
    raw[7].open = Some(f64::NAN);
    let provider = InMemoryMarketDataProvider::new().with_series("MSFT", raw.clone());
    let fetcher = SeriesFetcher::new(Arc::new(provider));

    let candles = fetcher.fetch("MSFT", "15m").await.expect("series");
    assert_eq!(candles.len(), 7);
    assert!(candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert!(!candles.iter().any(|c| c.timestamp == raw[2].timestamp.unwrap()));
}

#[tokio::test]
async fn test_all_rows_incomplete_is_no_data() {
    let raw = vec![RawCandle::default(); 5];
    let provider = InMemoryMarketDataProvider::new().with_series("CL=F", raw);
    let fetcher = SeriesFetcher::new(Arc::new(provider));
    assert!(fetcher.fetch("CL=F", "15m").await.is_none());
}

#[tokio::test]
async fn test_out_of_order_rows_sorted() {
    let mut raw = raw_from_closes(&[1.0, 2.0, 3.0]);
    raw.reverse();
    let provider = InMemoryMarketDataProvider::new().with_series("SI=F", raw);
    let fetcher = SeriesFetcher::new(Arc::new(provider));

    let closes: Vec<f64> = fetcher
        .fetch("SI=F", "1d")
        .await
        .expect("series")
        .iter()
        .map(|c| c.close)
        .collect();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);
}
