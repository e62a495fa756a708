//! Environment-sourced configuration.
//!
//! Every value is optional; unset or unparsable variables fall back to the
//! defaults below.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_ANALYSIS_INTERVAL_MINUTES: u64 = 10;
pub const DEFAULT_TIMEFRAME: &str = "15m";
pub const DEFAULT_STOP_DEV: f64 = 0.003;
pub const DEFAULT_TAKE_DEV: f64 = 0.003;
pub const DEFAULT_INSTRUMENT_DELAY_SECONDS: u64 = 5;
pub const DEFAULT_TELEGRAM_TOKEN: &str = "YOUR_TELEGRAM_BOT_TOKEN";
pub const DEFAULT_TELEGRAM_CHAT_ID: &str = "YOUR_TELEGRAM_CHAT_ID";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Parameters that stay constant for a whole cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub timeframe: String,
    pub stop_dev: f64,
    pub take_dev: f64,
    /// Pause after each instrument, courtesy towards the data provider.
    pub instrument_delay: Duration,
    /// Pause between two cycles in continuous mode.
    pub cycle_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            stop_dev: DEFAULT_STOP_DEV,
            take_dev: DEFAULT_TAKE_DEV,
            instrument_delay: Duration::from_secs(DEFAULT_INSTRUMENT_DELAY_SECONDS),
            cycle_interval: Duration::from_secs(DEFAULT_ANALYSIS_INTERVAL_MINUTES * 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
    pub base_url: String,
}

impl TelegramConfig {
    /// True once both credentials differ from the shipped placeholders.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
            && !self.chat_id.is_empty()
            && self.token != DEFAULT_TELEGRAM_TOKEN
            && self.chat_id != DEFAULT_TELEGRAM_CHAT_ID
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TELEGRAM_TOKEN.to_string(),
            chat_id: DEFAULT_TELEGRAM_CHAT_ID.to_string(),
            base_url: DEFAULT_TELEGRAM_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub run: RunConfig,
    pub telegram: TelegramConfig,
    pub yahoo_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            telegram: TelegramConfig::default(),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let interval_minutes = parse_or(
            &lookup,
            "ANALYSIS_INTERVAL_MINUTES",
            DEFAULT_ANALYSIS_INTERVAL_MINUTES,
        );
        let delay_seconds = parse_or(
            &lookup,
            "INSTRUMENT_DELAY_SECONDS",
            DEFAULT_INSTRUMENT_DELAY_SECONDS,
        );

        let run = RunConfig {
            timeframe: lookup("DEFAULT_TIMEFRAME")
                .filter(|tf| !tf.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string()),
            stop_dev: parse_fraction_or(&lookup, "DEFAULT_STOP_DEV", DEFAULT_STOP_DEV),
            take_dev: parse_fraction_or(&lookup, "DEFAULT_TAKE_DEV", DEFAULT_TAKE_DEV),
            instrument_delay: Duration::from_secs(delay_seconds),
            cycle_interval: minutes_to_duration(interval_minutes),
        };

        let telegram = TelegramConfig {
            token: lookup("TELEGRAM_TOKEN").unwrap_or_else(|| DEFAULT_TELEGRAM_TOKEN.to_string()),
            chat_id: lookup("TELEGRAM_CHAT_ID")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_CHAT_ID.to_string()),
            base_url: lookup("TELEGRAM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_BASE_URL.to_string()),
        };

        Self {
            run,
            telegram,
            yahoo_base_url: lookup("YAHOO_BASE_URL")
                .unwrap_or_else(|| DEFAULT_YAHOO_BASE_URL.to_string()),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key = key, value = %raw, "Config: unparsable value for {}, using default", key);
                default
            }
        },
        None => default,
    }
}

/// Deviations must be finite fractions in (0, 1) so stop and target land on
/// opposite sides of a positive entry.
fn parse_fraction_or<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default);
    if value.is_finite() && value > 0.0 && value < 1.0 {
        value
    } else {
        warn!(key = key, value = value, "Config: {} must be within (0, 1), using default", key);
        default
    }
}

fn minutes_to_duration(minutes: u64) -> Duration {
    match minutes.checked_mul(60) {
        Some(seconds) => Duration::from_secs(seconds),
        None => {
            warn!(
                minutes = minutes,
                "Config: ANALYSIS_INTERVAL_MINUTES out of range, using default"
            );
            Duration::from_secs(DEFAULT_ANALYSIS_INTERVAL_MINUTES * 60)
        }
    }
}

/// Deployment environment, read from `ENVIRONMENT` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}
