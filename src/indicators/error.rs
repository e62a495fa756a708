use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("non-finite close at bar {index}: {value}")]
    NonFiniteInput { index: usize, value: f64 },

    #[error("indicator column has {actual} values, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
