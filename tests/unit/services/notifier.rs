//! Unit tests for notifier selection

use alpha_signals::config::TelegramConfig;
use alpha_signals::services::notifier::{notifier_from_config, LogNotifier, Notifier};

#[tokio::test]
async fn test_log_notifier_never_fails() {
    LogNotifier.notify("Signal for AAPL (Stocks): Buy @ 180.0000").await;
}

#[tokio::test]
async fn test_placeholder_credentials_fall_back_to_log() {
    let notifier = notifier_from_config(&TelegramConfig::default());
    // Must not attempt any network call.
    notifier.notify("hello").await;
}
