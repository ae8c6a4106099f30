//! Fixed instrument catalog.

use crate::domain::error::TickerboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub display_name: &'static str,
    pub symbol: &'static str,
}

/// Catalog in selector order; the first entry is the default selection.
pub const CATALOG: [Instrument; 6] = [
    Instrument { display_name: "NVIDIA", symbol: "NVDA" },
    Instrument { display_name: "Microsoft", symbol: "MSFT" },
    Instrument { display_name: "Apple", symbol: "AAPL" },
    Instrument { display_name: "Google", symbol: "GOOGL" },
    Instrument { display_name: "Meta", symbol: "META" },
    Instrument { display_name: "Amazon", symbol: "AMZN" },
];

pub fn all() -> &'static [Instrument] {
    &CATALOG
}

pub fn default_instrument() -> &'static Instrument {
    &CATALOG[0]
}

pub fn find(display_name: &str) -> Option<&'static Instrument> {
    CATALOG.iter().find(|i| i.display_name == display_name)
}

pub fn find_by_symbol(symbol: &str) -> Option<&'static Instrument> {
    CATALOG
        .iter()
        .find(|i| i.symbol.eq_ignore_ascii_case(symbol))
}

/// Resolve a display name to its catalog entry.
pub fn resolve(display_name: &str) -> Result<&'static Instrument, TickerboardError> {
    find(display_name).ok_or_else(|| TickerboardError::UnknownInstrument {
        name: display_name.to_string(),
    })
}

/// Resolve a display name to its ticker symbol.
pub fn lookup(display_name: &str) -> Result<&'static str, TickerboardError> {
    resolve(display_name).map(|i| i.symbol)
}
