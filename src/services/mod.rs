//! Boundaries towards external systems: market data and notifications.

pub mod fetcher;
pub mod market_data;
pub mod notifier;
pub mod yahoo;

pub use fetcher::{lookback_for, SeriesFetcher};
pub use market_data::{InMemoryMarketDataProvider, MarketDataError, MarketDataProvider};
pub use notifier::{notifier_from_config, LogNotifier, Notifier, TelegramNotifier};
pub use yahoo::YahooMarketDataProvider;
