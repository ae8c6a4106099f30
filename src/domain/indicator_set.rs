//! The fixed set of indicators shown on the dashboard.

use crate::domain::indicator::macd::calculate_macd_default;
use crate::domain::indicator::{calculate_rsi, calculate_sma, IndicatorSeries};
use crate::domain::ohlcv::PriceBar;

pub const SMA_SHORT: usize = 50;
pub const SMA_LONG: usize = 200;
pub const RSI_PERIOD: usize = 14;

/// Five series, each aligned index-for-index with the bars they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub sma_50: IndicatorSeries,
    pub sma_200: IndicatorSeries,
    pub rsi_14: IndicatorSeries,
    pub macd: IndicatorSeries,
    pub macd_signal: IndicatorSeries,
}

pub fn compute_indicators(bars: &[PriceBar]) -> IndicatorSet {
    let macd = calculate_macd_default(bars);
    IndicatorSet {
        sma_50: calculate_sma(bars, SMA_SHORT),
        sma_200: calculate_sma(bars, SMA_LONG),
        rsi_14: calculate_rsi(bars, RSI_PERIOD),
        macd: macd.line,
        macd_signal: macd.signal,
    }
}
