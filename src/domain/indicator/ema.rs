//! Exponential Moving Average indicator.
//!
//! k = 2/(span+1), seeded with the first close, then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! No warmup cutoff: every bar gets a value once the seed exists.

use crate::domain::indicator::{IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::{closes, PriceBar};

pub fn calculate_ema(bars: &[PriceBar], span: usize) -> IndicatorSeries {
    if span == 0 {
        return IndicatorSeries::undefined(IndicatorType::Ema(span), bars);
    }
    let values = ema_values(&closes(bars), span)
        .into_iter()
        .map(Some)
        .collect();
    IndicatorSeries::from_values(IndicatorType::Ema(span), bars, values)
}

/// Raw EMA over `values`, seeded at `values[0]`. Empty input gives empty output.
pub(crate) fn ema_values(values: &[f64], span: usize) -> Vec<f64> {
    let k = smoothing_factor(span);
    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    let Some(&seed) = iter.next() else {
        return out;
    };

    let mut ema = seed;
    out.push(ema);
    for &value in iter {
        ema = value * k + ema * (1.0 - k);
        out.push(ema);
    }
    out
}

pub(crate) fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}
