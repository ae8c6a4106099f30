//! CSV file data adapter.
//!
//! Reads `{base_path}/{SYMBOL}.csv` with a `Date,Open,High,Low,Close,Volume`
//! header. Rows with `start <= date < end` are returned.

use crate::domain::error::TickerboardError;
use crate::domain::ohlcv::{normalize, PriceBar};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.to_uppercase()))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, TickerboardError> {
        let path = self.csv_path(symbol);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no csv file for symbol");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(TickerboardError::MarketData {
                    symbol: symbol.to_string(),
                    reason: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.deserialize::<CsvRow>() {
            let row = result.map_err(|e| TickerboardError::MarketData {
                symbol: symbol.to_string(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
                TickerboardError::MarketData {
                    symbol: symbol.to_string(),
                    reason: format!("invalid date {:?}: {}", row.date, e),
                }
            })?;

            if date < start_date || date >= end_date {
                continue;
            }

            bars.push(PriceBar {
                date,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            });
        }

        Ok(normalize(bars))
    }
}
