//! Simple Moving Average indicator.
//!
//! SMA[i] = mean(C[i-n+1..=i]).
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::{closes, PriceBar};

pub fn calculate_sma(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    IndicatorSeries::from_values(
        IndicatorType::Sma(period),
        bars,
        sma_values(&closes(bars), period),
    )
}

pub(crate) fn sma_values(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                let window = &values[i + 1 - period..=i];
                Some(window.iter().sum::<f64>() / period as f64)
            }
        })
        .collect()
}
