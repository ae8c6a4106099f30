//! RSI (Relative Strength Index) indicator implementation.
//!
//! Wilder smoothing as an exponential average with alpha = 1/n:
//! - gain/loss at index 0 is 0 (no prior close)
//! - avg[0] = 0, avg[i] = (1 - 1/n) * avg[i-1] + change[i] / n
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0: RSI = 100
//!
//! Warmup: the first n bars are undefined.

use crate::domain::indicator::{IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::{closes, PriceBar};

pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    IndicatorSeries::from_values(
        IndicatorType::Rsi(period),
        bars,
        rsi_values(&closes(bars), period),
    )
}

pub(crate) fn rsi_values(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut values = vec![None; closes.len()];
    if period == 0 || closes.len() < 2 {
        return values;
    }

    let alpha = 1.0 / period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        avg_gain = (1.0 - alpha) * avg_gain + alpha * change.max(0.0);
        avg_loss = (1.0 - alpha) * avg_loss + alpha * (-change).max(0.0);
        if i >= period {
            values[i] = Some(relative_strength_index(avg_gain, avg_loss));
        }
    }

    values
}

fn relative_strength_index(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
    }
}
