//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod instrument;
pub mod signal;

pub use indicators::{Candle, IndicatorRow, IndicatorSet, RawCandle};
pub use instrument::{catalog, Instrument, InstrumentGroup};
pub use signal::{Signal, SignalDirection};
