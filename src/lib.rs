//! Periodic technical-analysis signals for a fixed instrument catalog.
//!
//! One cycle walks the catalog, fetches a price series per instrument,
//! evaluates EMA/MACD/RSI/Bollinger indicators on it and forwards every
//! non-neutral signal to a [`services::notifier::Notifier`].

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
