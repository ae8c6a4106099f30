//! Market data access port trait.

use crate::domain::error::TickerboardError;
use crate::domain::ohlcv::PriceBar;
use chrono::NaiveDate;

pub trait DataPort {
    /// Daily bars for `symbol` with `start <= date < end`, ascending by date.
    ///
    /// An unknown symbol or a range without trading days is `Ok(vec![])`;
    /// `Err` is reserved for transport and decoding failures.
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, TickerboardError>;
}
