//! User selection for one dashboard pass: instrument plus date range.

use chrono::NaiveDate;

use crate::domain::error::TickerboardError;
use crate::domain::instrument::{self, Instrument};

/// Default start date offered by the date pickers.
pub const DEFAULT_START: (i32, u32, u32) = (2023, 1, 1);

pub fn default_start() -> NaiveDate {
    let (y, m, d) = DEFAULT_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetch window. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Validate against `today`: a start after the end is rejected, an end
    /// in the future is clamped to `today`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, TickerboardError> {
        if start > end {
            return Err(TickerboardError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start,
            end: end.min(today),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub instrument: &'static Instrument,
    pub range: DateRange,
}

impl Selection {
    pub fn new(
        display_name: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, TickerboardError> {
        let instrument = instrument::resolve(display_name)?;
        let range = DateRange::new(
            start.unwrap_or_else(default_start),
            end.unwrap_or(today),
            today,
        )?;
        Ok(Self { instrument, range })
    }

    pub fn symbol(&self) -> &'static str {
        self.instrument.symbol
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_apply_when_dates_missing() {
        let today = date(2025, 6, 30);
        let sel = Selection::new("Apple", None, None, today).unwrap();
        assert_eq!(sel.symbol(), "AAPL");
        assert_eq!(sel.range.start, date(2023, 1, 1));
        assert_eq!(sel.range.end, today);
    }

    #[test]
    fn start_after_end_is_rejected() {
        let err = Selection::new(
            "Meta",
            Some(date(2024, 5, 1)),
            Some(date(2024, 4, 1)),
            date(2025, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(err, TickerboardError::InvalidDateRange { .. }));
    }

    #[test]
    fn future_end_is_clamped_to_today() {
        let today = date(2025, 1, 10);
        let range = DateRange::new(date(2024, 1, 1), date(2030, 1, 1), today).unwrap();
        assert_eq!(range.end, today);
    }

    #[test]
    fn equal_start_and_end_is_empty_but_valid() {
        let range = DateRange::new(date(2024, 12, 25), date(2024, 12, 25), date(2025, 1, 1))
            .unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn unknown_instrument_is_rejected() {
        let err = Selection::new("Netflix", None, None, date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, TickerboardError::UnknownInstrument { ref name } if name == "Netflix"));
        assert_eq!(
            err.to_string(),
            instrument::lookup("Netflix").unwrap_err().to_string()
        );
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(parse_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_date(" 2024-02-28 "), Some(date(2024, 2, 28)));
        assert_eq!(parse_date("02/29/2024"), None);
    }
}
