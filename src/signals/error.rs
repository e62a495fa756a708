use crate::indicators::IndicatorError;
use thiserror::Error;

/// Why an evaluation produced no signal for reasons other than a neutral read.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    #[error("insufficient data for {instrument}: {reason}")]
    DataUnavailable { instrument: String, reason: String },

    #[error("indicator computation failed: {0}")]
    ComputationFailure(#[from] IndicatorError),
}

impl SignalError {
    pub fn data_unavailable(instrument: &str, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            instrument: instrument.to_string(),
            reason: reason.into(),
        }
    }
}
