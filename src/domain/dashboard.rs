//! One dashboard pass: fetch, compute, classify.
//!
//! `render` is a pure function of the selection and whatever the data port
//! returns; nothing is retained between calls.

use crate::domain::chart::{self, ChartSpec};
use crate::domain::indicator_set::{compute_indicators, IndicatorSet};
use crate::domain::ohlcv::PriceBar;
use crate::domain::selection::Selection;
use crate::domain::signal::SignalClassification;
use crate::ports::data_port::DataPort;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub selection: Selection,
    pub bars: Vec<PriceBar>,
    pub indicators: IndicatorSet,
    /// `None` when RSI has no defined value.
    pub signal: Option<SignalClassification>,
}

impl Dashboard {
    pub fn compute(selection: Selection, bars: Vec<PriceBar>) -> Self {
        let indicators = compute_indicators(&bars);
        let signal = indicators.rsi_14.latest().map(SignalClassification::classify);
        Self {
            selection,
            bars,
            indicators,
            signal,
        }
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn price_chart(&self) -> ChartSpec {
        chart::price_chart(&self.bars, &self.indicators)
    }

    pub fn rsi_chart(&self) -> ChartSpec {
        chart::rsi_chart(&self.indicators)
    }

    pub fn macd_chart(&self) -> ChartSpec {
        chart::macd_chart(&self.indicators)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutcome {
    /// Terminal state: the fetch produced nothing, no indicators were computed.
    NoData {
        selection: Selection,
        reason: Option<String>,
    },
    Ready(Box<Dashboard>),
}

impl DashboardOutcome {
    pub fn selection(&self) -> &Selection {
        match self {
            DashboardOutcome::NoData { selection, .. } => selection,
            DashboardOutcome::Ready(dashboard) => &dashboard.selection,
        }
    }
}

pub fn render(selection: &Selection, data_port: &dyn DataPort) -> DashboardOutcome {
    let symbol = selection.symbol();
    let range = selection.range;

    if range.is_empty() {
        tracing::info!(symbol, start = %range.start, end = %range.end, "empty date range");
        return DashboardOutcome::NoData {
            selection: *selection,
            reason: None,
        };
    }

    tracing::debug!(symbol, start = %range.start, end = %range.end, "fetching bars");
    let bars = match data_port.fetch_ohlcv(symbol, range.start, range.end) {
        Ok(bars) => bars,
        Err(e) => {
            tracing::warn!(symbol, error = %e, "fetch failed");
            return DashboardOutcome::NoData {
                selection: *selection,
                reason: Some(e.to_string()),
            };
        }
    };

    if bars.is_empty() {
        tracing::info!(symbol, "no bars returned");
        return DashboardOutcome::NoData {
            selection: *selection,
            reason: None,
        };
    }

    tracing::debug!(symbol, bars = bars.len(), "computing indicators");
    let dashboard = Dashboard::compute(*selection, bars);
    match dashboard.signal {
        Some(signal) => tracing::info!(symbol, %signal, "dashboard ready"),
        None => tracing::info!(symbol, "dashboard ready, RSI undefined"),
    }
    DashboardOutcome::Ready(Box::new(dashboard))
}
