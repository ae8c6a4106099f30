//! Daily price bar representation.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// Scale open/high/low/close so that close becomes `adjusted_close`.
    ///
    /// Volume is left untouched. A zero close leaves the bar unchanged.
    pub fn adjusted(&self, adjusted_close: f64) -> PriceBar {
        if self.close == 0.0 {
            return self.clone();
        }
        let ratio = adjusted_close / self.close;
        PriceBar {
            date: self.date,
            open: self.open * ratio,
            high: self.high * ratio,
            low: self.low * ratio,
            close: adjusted_close,
            volume: self.volume,
        }
    }
}

/// Close prices in bar order.
pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// Sort ascending by date, keeping the last bar seen for any repeated date.
pub fn normalize(mut bars: Vec<PriceBar>) -> Vec<PriceBar> {
    bars.reverse();
    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_bar() -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000.0,
        }
    }

    #[test]
    fn adjusted_scales_prices_not_volume() {
        let bar = sample_bar().adjusted(52.5);
        assert_relative_eq!(bar.open, 50.0);
        assert_relative_eq!(bar.high, 55.0);
        assert_relative_eq!(bar.low, 45.0);
        assert_relative_eq!(bar.close, 52.5);
        assert_relative_eq!(bar.volume, 50_000.0);
    }

    #[test]
    fn adjusted_zero_close_is_identity() {
        let mut bar = sample_bar();
        bar.close = 0.0;
        assert_eq!(bar.adjusted(10.0), bar);
    }

    #[test]
    fn normalize_sorts_and_keeps_last_duplicate() {
        let mut a = sample_bar();
        a.date = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let b = sample_bar();
        let mut c = sample_bar();
        c.close = 200.0;

        let bars = normalize(vec![a.clone(), b, c]);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_relative_eq!(bars[0].close, 200.0);
        assert_eq!(bars[1], a);
    }

    #[test]
    fn closes_preserves_order() {
        let mut later = sample_bar();
        later.close = 106.0;
        assert_eq!(closes(&[sample_bar(), later]), vec![105.0, 106.0]);
    }
}
