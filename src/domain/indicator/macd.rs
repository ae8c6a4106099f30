//! MACD (Moving Average Convergence Divergence) indicator.
//!
//! MACD Line = EMA(fast) - EMA(slow)
//! Signal Line = EMA(signal) of MACD Line
//!
//! Default parameters: fast=12, slow=26, signal=9.
//! Both EMAs are seeded at the first value and emitted for every bar, so there
//! is no warmup cutoff. Fewer than two closes yields all-undefined output.

use crate::domain::indicator::ema::{calculate_ema, ema_values};
use crate::domain::indicator::{IndicatorSeries, IndicatorType};
use crate::domain::ohlcv::PriceBar;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
}

pub fn calculate_macd(
    bars: &[PriceBar],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> MacdSeries {
    let line_type = IndicatorType::MacdLine { fast, slow };
    let signal_type = IndicatorType::MacdSignal {
        fast,
        slow,
        signal: signal_period,
    };

    let undefined = || MacdSeries {
        line: IndicatorSeries::undefined(line_type, bars),
        signal: IndicatorSeries::undefined(signal_type, bars),
    };
    if bars.len() < 2 || signal_period == 0 {
        return undefined();
    }

    // a zero span leaves its EMA undefined, and with it the whole line
    let ema_fast = calculate_ema(bars, fast);
    let ema_slow = calculate_ema(bars, slow);
    let line: Option<Vec<f64>> = ema_fast
        .values
        .iter()
        .zip(&ema_slow.values)
        .map(|(f, s)| Some(f.value? - s.value?))
        .collect();
    let Some(macd_line) = line else {
        return undefined();
    };
    let signal_line = ema_values(&macd_line, signal_period);

    MacdSeries {
        line: IndicatorSeries::from_values(
            line_type,
            bars,
            macd_line.into_iter().map(Some).collect(),
        ),
        signal: IndicatorSeries::from_values(
            signal_type,
            bars,
            signal_line.into_iter().map(Some).collect(),
        ),
    }
}

pub fn calculate_macd_default(bars: &[PriceBar]) -> MacdSeries {
    calculate_macd(bars, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
