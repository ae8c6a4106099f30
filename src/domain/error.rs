//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for tickerboard.
#[derive(Debug, thiserror::Error)]
pub enum TickerboardError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("unknown instrument: {name}")]
    UnknownInstrument { name: String },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("market data error for {symbol}: {reason}")]
    MarketData { symbol: String, reason: String },

    #[error("no data available for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TickerboardError> for std::process::ExitCode {
    fn from(err: &TickerboardError) -> Self {
        let code: u8 = match err {
            TickerboardError::Io(_) => 1,
            TickerboardError::ConfigParse { .. } | TickerboardError::ConfigInvalid { .. } => 2,
            TickerboardError::MarketData { .. } => 3,
            TickerboardError::UnknownInstrument { .. }
            | TickerboardError::InvalidDateRange { .. } => 4,
            TickerboardError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
