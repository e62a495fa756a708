pub mod error;
pub mod pipeline;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use pipeline::*;
