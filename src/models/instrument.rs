//! Static instrument catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub group: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            group: group.into(),
        }
    }
}

/// A market category and its symbols, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentGroup {
    pub name: String,
    pub symbols: Vec<String>,
}

impl InstrumentGroup {
    pub fn new(name: &str, symbols: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn instruments(&self) -> impl Iterator<Item = Instrument> + '_ {
        self.symbols
            .iter()
            .map(move |symbol| Instrument::new(symbol.clone(), self.name.clone()))
    }
}

pub const FOREX: &str = "Forex";
pub const CRYPTO: &str = "Crypto";
pub const STOCKS: &str = "Stocks";
pub const COMMODITIES: &str = "Commodities";

/// The fixed catalog evaluated by every cycle.
pub fn catalog() -> Vec<InstrumentGroup> {
    vec![
        InstrumentGroup::new(
            FOREX,
            &["EURUSD=X", "GBPUSD=X", "USDJPY=X", "AUDUSD=X", "USDCAD=X"],
        ),
        InstrumentGroup::new(CRYPTO, &["BTC-USD", "ETH-USD", "SOL-USD", "BNB-USD"]),
        InstrumentGroup::new(STOCKS, &["AAPL", "MSFT", "AMZN", "PETR4.SA", "VALE3.SA"]),
        InstrumentGroup::new(COMMODITIES, &["GC=F", "CL=F", "SI=F"]),
    ]
}
