//! Memoizing data adapter.
//!
//! Keeps the result of the most recent `(symbol, start, end)` request. A
//! repeat of that exact request is answered from memory; any other request
//! drops the entry before going to the inner port. Errors are not cached.

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::error::TickerboardError;
use crate::domain::ohlcv::PriceBar;
use crate::ports::data_port::DataPort;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
}

pub struct CachedDataPort<P> {
    inner: P,
    last: Mutex<Option<(CacheKey, Vec<PriceBar>)>>,
}

impl<P: DataPort> CachedDataPort<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }

    fn invalidate(&self) {
        if let Ok(mut last) = self.last.lock() {
            *last = None;
        }
    }
}

impl<P: DataPort> DataPort for CachedDataPort<P> {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, TickerboardError> {
        let key = CacheKey {
            symbol: symbol.to_string(),
            start: start_date,
            end: end_date,
        };

        if let Ok(last) = self.last.lock() {
            if let Some((cached_key, bars)) = last.as_ref() {
                if *cached_key == key {
                    tracing::debug!(symbol, "cache hit");
                    return Ok(bars.clone());
                }
            }
        }

        tracing::debug!(symbol, "cache miss");
        self.invalidate();
        let bars = self.inner.fetch_ohlcv(symbol, start_date, end_date)?;

        if let Ok(mut last) = self.last.lock() {
            *last = Some((key, bars.clone()));
        }
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPort {
        calls: AtomicUsize,
        failing: &'static [&'static str],
    }

    impl DataPort for CountingPort {
        fn fetch_ohlcv(
            &self,
            symbol: &str,
            start_date: NaiveDate,
            _end_date: NaiveDate,
        ) -> Result<Vec<PriceBar>, TickerboardError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.iter().any(|s| *s == symbol) {
                return Err(TickerboardError::MarketData {
                    symbol: symbol.to_string(),
                    reason: "down".into(),
                });
            }
            Ok(vec![PriceBar {
                date: start_date,
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                volume: 1.0,
            }])
        }
    }

    fn port(failing: &'static [&'static str]) -> CachedDataPort<CountingPort> {
        CachedDataPort::new(CountingPort {
            calls: AtomicUsize::new(0),
            failing,
        })
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn same_key_is_served_from_cache() {
        let cached = port(&[]);
        cached.fetch_ohlcv("NVDA", date(1), date(10)).unwrap();
        cached.fetch_ohlcv("NVDA", date(1), date(10)).unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn changed_key_refetches_and_replaces() {
        let cached = port(&[]);
        cached.fetch_ohlcv("NVDA", date(1), date(10)).unwrap();
        cached.fetch_ohlcv("MSFT", date(1), date(10)).unwrap();
        cached.fetch_ohlcv("NVDA", date(1), date(10)).unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn changed_dates_refetch() {
        let cached = port(&[]);
        let first = cached.fetch_ohlcv("AAPL", date(1), date(10)).unwrap();
        let second = cached.fetch_ohlcv("AAPL", date(2), date(10)).unwrap();
        assert_ne!(first[0].date, second[0].date);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let cached = port(&["META"]);
        assert!(cached.fetch_ohlcv("META", date(1), date(10)).is_err());
        assert!(cached.fetch_ohlcv("META", date(1), date(10)).is_err());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_fetch_for_new_key_drops_old_entry() {
        let cached = port(&["META"]);
        cached.fetch_ohlcv("AMZN", date(1), date(10)).unwrap();
        assert!(cached.fetch_ohlcv("META", date(1), date(10)).is_err());
        assert!(cached.last.lock().unwrap().is_none());

        cached.fetch_ohlcv("AMZN", date(1), date(10)).unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);
    }
}
