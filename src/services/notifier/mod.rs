//! Notification boundary. Delivery is fire-and-forget: implementations log
//! their own failures and never report them to the caller.

pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::config::TelegramConfig;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str);
}

/// Writes messages to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) {
        info!(message = %message, "LogNotifier: {}", message);
    }
}

/// Telegram when credentials are configured, log-only otherwise.
pub fn notifier_from_config(config: &TelegramConfig) -> Arc<dyn Notifier> {
    if config.is_configured() {
        info!("Notifier: Telegram delivery enabled");
        Arc::new(TelegramNotifier::new(config))
    } else {
        warn!("Notifier: Telegram credentials not set, signals will only be logged");
        Arc::new(LogNotifier)
    }
}
