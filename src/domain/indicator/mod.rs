//! Technical indicator implementations.
//!
//! This module provides types for representing indicator series:
//! - `IndicatorPoint`: one date-aligned value, `None` inside the warm-up window
//! - `IndicatorType`: indicator identity + parameters
//! - `IndicatorSeries`: a time series of indicator points aligned to the bar dates

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod macd;

pub use ema::calculate_ema;
pub use macd::{calculate_macd, MacdSeries};
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;

use chrono::NaiveDate;
use std::fmt;

use crate::domain::ohlcv::PriceBar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl IndicatorPoint {
    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
    MacdLine { fast: usize, slow: usize },
    MacdSignal { fast: usize, slow: usize, signal: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Pair each bar date with the value at the same index.
    pub fn from_values(
        indicator_type: IndicatorType,
        bars: &[PriceBar],
        values: Vec<Option<f64>>,
    ) -> Self {
        let values = bars
            .iter()
            .zip(values)
            .map(|(bar, value)| IndicatorPoint {
                date: bar.date,
                value,
            })
            .collect();
        Self {
            indicator_type,
            values,
        }
    }

    /// A series with every point undefined.
    pub fn undefined(indicator_type: IndicatorType, bars: &[PriceBar]) -> Self {
        Self::from_values(indicator_type, bars, vec![None; bars.len()])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).and_then(|p| p.value)
    }

    /// Most recent defined value.
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|p| p.value)
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|p| p.is_defined()).count()
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA {}", period),
            IndicatorType::Ema(period) => write!(f, "EMA {}", period),
            IndicatorType::Rsi(period) => write!(f, "RSI {}", period),
            IndicatorType::MacdLine { .. } => write!(f, "MACD"),
            IndicatorType::MacdSignal { .. } => write!(f, "Signal"),
        }
    }
}
