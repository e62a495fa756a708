//! Telegram Bot API notifier

use super::Notifier;
use crate::config::TelegramConfig;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(config, client)
    }

    pub fn with_client(config: &TelegramConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        info!(message = %message, "TelegramNotifier: sending message");

        let payload = json!({
            "chat_id": self.chat_id,
            "text": message,
        });

        match self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                debug!("TelegramNotifier: message delivered");
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(
                    status = %status,
                    body = %body,
                    "TelegramNotifier: delivery rejected with status {}",
                    status
                );
            }
            Err(e) => {
                error!(error = %e, "TelegramNotifier: delivery failed: {}", e);
            }
        }
    }
}
