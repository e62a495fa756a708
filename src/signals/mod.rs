//! Signal evaluation: threshold rule over the latest indicator row.

pub mod decision;
pub mod error;
pub mod evaluator;

pub use decision::*;
pub use error::SignalError;
pub use evaluator::{analyze, SignalEvaluator, MIN_CANDLES};
