//! Core domain types and logic.

pub mod instrument;
pub mod ohlcv;
pub mod selection;
pub mod indicator;
pub mod indicator_set;
pub mod signal;
pub mod chart;
pub mod dashboard;
pub mod error;
