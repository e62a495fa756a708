//! Yahoo Finance market data provider implementation

use crate::models::indicators::RawCandle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use chrono::DateTime;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::messages::{ChartResponse, ChartResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct YahooMarketDataProvider {
    client: Client,
    base_url: String,
}

impl YahooMarketDataProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Mozilla/5.0 (compatible; alpha-signals)")
            .build()
            .unwrap_or_default();
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: &str,
        lookback: &str,
    ) -> Result<Vec<RawCandle>, MarketDataError> {
        let response = self
            .client
            .get(self.chart_url(symbol))
            .query(&[("range", lookback), ("interval", timeframe)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let chart: ChartResponse =
            serde_json::from_str(&body).map_err(|e| MarketDataError::Decode(e.to_string()))?;

        if let Some(err) = chart.chart.error {
            return Err(MarketDataError::Upstream(format!(
                "{}: {}",
                err.code, err.description
            )));
        }

        let candles = chart
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(into_raw_candles)
            .unwrap_or_default();

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "YahooMarketDataProvider: received {} rows for {}",
            candles.len(),
            symbol
        );

        Ok(candles)
    }
}

/// Zip the columnar chart payload into rows. Short columns read as missing.
pub fn into_raw_candles(result: ChartResult) -> Vec<RawCandle> {
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    result
        .timestamp
        .iter()
        .enumerate()
        .map(|(i, &ts)| RawCandle {
            timestamp: DateTime::from_timestamp(ts, 0),
            open: at(&quote.open, i),
            high: at(&quote.high, i),
            low: at(&quote.low, i),
            close: at(&quote.close, i),
            volume: at(&quote.volume, i),
        })
        .collect()
}

fn at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}
